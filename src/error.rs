use crate::hash::{HashFormatError, MAX_COST, MIN_COST};
use bcrypt::BcryptError;
use thiserror::Error;

pub const EXIT_MISMATCH: i32 = 1;
pub const EXIT_CONFIG: i32 = 8;

#[derive(Debug, Error)]
pub enum BecryptError {
    #[error("{0}")]
    Usage(String),
    #[error("Argument for cost out of range ({}..{}): {0}", MIN_COST, MAX_COST)]
    CostOutOfRange(String),
    #[error("Malformed hash: {0}")]
    MalformedHash(#[from] HashFormatError),
    #[error("Cannot read cost from hash: {0}")]
    CostLookup(#[source] BcryptError),
    #[error("Cannot compare password with hash: {0}")]
    Compare(#[source] BcryptError),
    #[error("Cannot generate hash: {0}")]
    Generate(#[source] BcryptError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Password missing")]
    PasswordMissing,
}

impl BecryptError {
    pub fn usage(msg: impl Into<String>) -> Self {
        BecryptError::Usage(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BecryptError::Usage(_) => 2,
            BecryptError::CostLookup(_) => 3,
            BecryptError::Generate(_) => 4,
            BecryptError::Io(_) | BecryptError::PasswordMissing => 5,
            BecryptError::Compare(_) => 6,
            BecryptError::CostOutOfRange(_) => 7,
            BecryptError::MalformedHash(e) => e.exit_code(),
        }
    }

    /// Whether the help text should accompany the message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            BecryptError::Usage(_) | BecryptError::CostOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = [
            BecryptError::usage("x"),
            BecryptError::CostLookup(BcryptError::CostNotAllowed(3)),
            BecryptError::Generate(BcryptError::CostNotAllowed(3)),
            BecryptError::PasswordMissing,
            BecryptError::Compare(BcryptError::CostNotAllowed(3)),
            BecryptError::CostOutOfRange("3".to_string()),
            BecryptError::MalformedHash(HashFormatError::EmptyType),
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes, vec![2, 3, 4, 5, 6, 7, 12]);
        assert!(!codes.contains(&EXIT_MISMATCH));
        assert!(!codes.contains(&EXIT_CONFIG));
    }

    #[test]
    fn only_argument_problems_show_usage() {
        assert!(BecryptError::usage("Too many arguments").shows_usage());
        assert!(BecryptError::CostOutOfRange("40".to_string()).shows_usage());
        assert!(!BecryptError::PasswordMissing.shows_usage());
        assert!(!BecryptError::MalformedHash(HashFormatError::EmptyType).shows_usage());
    }
}
