use thiserror::Error;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// Length of the trailing field: 22 characters of salt and 31 of digest.
pub const SALT_DIGEST_LEN: usize = 53;

/// Structural problems found in a candidate hash, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashFormatError {
    #[error("hash must consist of 4 '$'-separated fields, found {0}")]
    FieldCount(usize),
    #[error("hash must start with '$'")]
    MissingLeadingDelimiter,
    #[error("hash type field is empty")]
    EmptyType,
    #[error("hash type '{0}' is not bcrypt (must start with '2')")]
    NotBcrypt(String),
    #[error("hash type '{0}' is longer than 2 characters")]
    TypeTooLong(String),
    #[error("cost field '{0}' must be exactly 2 characters")]
    CostLength(String),
    #[error("cost field '{0}' must be 2 decimal digits")]
    CostNotNumeric(String),
    #[error("cost {0} is outside {}..{}", MIN_COST, MAX_COST)]
    CostOutOfRange(u32),
    #[error("salt and digest must be {} characters, found {0}", SALT_DIGEST_LEN)]
    SaltDigestLength(usize),
}

impl HashFormatError {
    pub fn exit_code(&self) -> i32 {
        match self {
            HashFormatError::FieldCount(_) => 10,
            HashFormatError::MissingLeadingDelimiter => 11,
            HashFormatError::EmptyType => 12,
            HashFormatError::NotBcrypt(_) => 13,
            HashFormatError::TypeTooLong(_) => 14,
            HashFormatError::CostLength(_) => 15,
            HashFormatError::CostNotNumeric(_) => 16,
            HashFormatError::CostOutOfRange(_) => 17,
            HashFormatError::SaltDigestLength(_) => 18,
        }
    }
}

/// Checks that `hash` looks like `$2<x>$<cc>$<53 chars>` without touching bcrypt itself.
pub fn validate(hash: &str) -> Result<(), HashFormatError> {
    let fields: Vec<&str> = hash.split('$').collect();
    if fields.len() != 4 {
        return Err(HashFormatError::FieldCount(fields.len()));
    }
    let (lead, kind, cost, rest) = (fields[0], fields[1], fields[2], fields[3]);

    if !lead.is_empty() {
        return Err(HashFormatError::MissingLeadingDelimiter);
    }
    if kind.is_empty() {
        return Err(HashFormatError::EmptyType);
    }
    if !kind.starts_with('2') {
        return Err(HashFormatError::NotBcrypt(kind.to_string()));
    }
    if kind.chars().count() > 2 {
        return Err(HashFormatError::TypeTooLong(kind.to_string()));
    }
    if cost.chars().count() != 2 {
        return Err(HashFormatError::CostLength(cost.to_string()));
    }
    if !cost.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HashFormatError::CostNotNumeric(cost.to_string()));
    }
    // Two ASCII digits always parse.
    let value: u32 = cost
        .parse()
        .map_err(|_| HashFormatError::CostNotNumeric(cost.to_string()))?;
    if !(MIN_COST..=MAX_COST).contains(&value) {
        return Err(HashFormatError::CostOutOfRange(value));
    }
    let rest_len = rest.chars().count();
    if rest_len != SALT_DIGEST_LEN {
        return Err(HashFormatError::SaltDigestLength(rest_len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAIL: &str = "N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

    fn with(kind: &str, cost: &str, tail: &str) -> String {
        format!("${}${}${}", kind, cost, tail)
    }

    #[test]
    fn accepts_well_formed_hashes() {
        assert_eq!(TAIL.len(), SALT_DIGEST_LEN);
        for kind in ["2a", "2b", "2y", "2x", "2"] {
            assert_eq!(validate(&with(kind, "10", TAIL)), Ok(()));
        }
        assert_eq!(validate(&with("2b", "04", TAIL)), Ok(()));
        assert_eq!(validate(&with("2b", "31", TAIL)), Ok(()));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(validate(""), Err(HashFormatError::FieldCount(1)));
        assert_eq!(validate("$2a$10"), Err(HashFormatError::FieldCount(3)));
        assert_eq!(
            validate(&format!("$2a$10${}$", TAIL)),
            Err(HashFormatError::FieldCount(5))
        );
    }

    #[test]
    fn rejects_text_before_first_delimiter() {
        assert_eq!(
            validate(&format!("x$2a$10${}", TAIL)),
            Err(HashFormatError::MissingLeadingDelimiter)
        );
    }

    #[test]
    fn rejects_bad_type_field() {
        assert_eq!(validate(&with("", "10", TAIL)), Err(HashFormatError::EmptyType));
        assert_eq!(
            validate(&with("1", "10", TAIL)),
            Err(HashFormatError::NotBcrypt("1".to_string()))
        );
        assert_eq!(
            validate(&with("2ab", "10", TAIL)),
            Err(HashFormatError::TypeTooLong("2ab".to_string()))
        );
    }

    #[test]
    fn rejects_bad_cost_field() {
        assert_eq!(
            validate(&with("2a", "5", TAIL)),
            Err(HashFormatError::CostLength("5".to_string()))
        );
        assert_eq!(
            validate(&with("2a", "1a", TAIL)),
            Err(HashFormatError::CostNotNumeric("1a".to_string()))
        );
        assert_eq!(
            validate(&with("2a", "03", TAIL)),
            Err(HashFormatError::CostOutOfRange(3))
        );
        assert_eq!(
            validate(&with("2a", "32", TAIL)),
            Err(HashFormatError::CostOutOfRange(32))
        );
    }

    #[test]
    fn rejects_short_and_long_tail() {
        assert_eq!(
            validate(&with("2a", "10", &TAIL[1..])),
            Err(HashFormatError::SaltDigestLength(52))
        );
        assert_eq!(
            validate(&with("2a", "10", &format!("{}x", TAIL))),
            Err(HashFormatError::SaltDigestLength(54))
        );
    }

    #[test]
    fn every_rule_has_its_own_exit_code() {
        let errors = [
            HashFormatError::FieldCount(1),
            HashFormatError::MissingLeadingDelimiter,
            HashFormatError::EmptyType,
            HashFormatError::NotBcrypt(String::new()),
            HashFormatError::TypeTooLong(String::new()),
            HashFormatError::CostLength(String::new()),
            HashFormatError::CostNotNumeric(String::new()),
            HashFormatError::CostOutOfRange(0),
            HashFormatError::SaltDigestLength(0),
        ];
        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        codes.dedup();
        assert_eq!(codes, (10..=18).collect::<Vec<_>>());
    }
}
