use crate::error::BecryptError;
use crate::hash::{primitive, validate};
use std::io::Write;

/// Prints the cost embedded in `hash`.
pub fn report_cost<W: Write>(hash: &str, out: &mut W) -> Result<u32, BecryptError> {
    validate(hash)?;
    let cost = primitive::cost(hash).map_err(BecryptError::CostLookup)?;
    writeln!(out, "{}", cost)?;
    Ok(cost)
}
