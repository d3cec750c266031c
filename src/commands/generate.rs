use crate::error::BecryptError;
use crate::hash::{primitive, MAX_COST, MIN_COST};
use crate::password::PasswordSource;
use std::io::Write;

pub fn generate_hash<W: Write>(
    cost: u32,
    source: &mut dyn PasswordSource,
    out: &mut W,
) -> Result<String, BecryptError> {
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(BecryptError::CostOutOfRange(cost.to_string()));
    }
    let password = source.read_password(true)?;
    let hashed = primitive::generate(&password, cost).map_err(BecryptError::Generate)?;
    writeln!(out, "{}", hashed)?;
    Ok(hashed)
}
