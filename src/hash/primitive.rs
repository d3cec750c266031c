use bcrypt::{BcryptError, HashParts};
use std::str::FromStr;

/// Cost embedded in `hash`, as reported by bcrypt.
pub fn cost(hash: &str) -> Result<u32, BcryptError> {
    let parts = HashParts::from_str(hash)?;
    Ok(parts.get_cost())
}

/// Constant-time check of `password` against `hash`.
pub fn compare(hash: &str, password: &[u8]) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}

pub fn generate(password: &[u8], cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(password, cost)
}
