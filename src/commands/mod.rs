pub mod check;
pub mod cost;
pub mod generate;

pub use check::*;
pub use cost::*;
pub use generate::*;

use crate::cli::{Command, Invocation};
use crate::error::{BecryptError, EXIT_MISMATCH};
use crate::password::PasswordSource;
use std::io::Write;

/// Result of a run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Help,
    Done,
    Matched,
    Mismatched,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Mismatched => EXIT_MISMATCH,
            Outcome::Help | Outcome::Done | Outcome::Matched => 0,
        }
    }
}

/// Executes a resolved invocation, writing its single result line to `out`.
pub fn run<W: Write>(
    invocation: &Invocation,
    source: &mut dyn PasswordSource,
    out: &mut W,
) -> Result<Outcome, BecryptError> {
    log::debug!("Running {:?}", invocation.command);
    match &invocation.command {
        Command::Help => Ok(Outcome::Help),
        Command::ReportCost { hash } => {
            report_cost(hash, out)?;
            Ok(Outcome::Done)
        }
        Command::CheckPassword { hash } => {
            if check_password(hash, invocation.quiet, source, out)? {
                Ok(Outcome::Matched)
            } else {
                Ok(Outcome::Mismatched)
            }
        }
        Command::GenerateHash { cost } => {
            generate_hash(*cost, source, out)?;
            Ok(Outcome::Done)
        }
    }
}
