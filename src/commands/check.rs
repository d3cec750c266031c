use crate::error::BecryptError;
use crate::hash::{primitive, validate};
use crate::password::PasswordSource;
use std::io::Write;

pub fn check_password<W: Write>(
    hash: &str,
    quiet: bool,
    source: &mut dyn PasswordSource,
    out: &mut W,
) -> Result<bool, BecryptError> {
    validate(hash)?;
    let password = source.read_password(false)?;
    let matched = primitive::compare(hash, &password).map_err(BecryptError::Compare)?;
    log::debug!("Password check finished, matched={}", matched);
    if !quiet {
        writeln!(out, "{}", if matched { "yes" } else { "no" })?;
    }
    Ok(matched)
}
