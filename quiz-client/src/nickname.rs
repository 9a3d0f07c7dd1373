use std::fmt;

use thiserror::Error;

pub const MIN_NICKNAME_CHARS: usize = 2;
pub const MAX_NICKNAME_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    #[error("nickname must be between 2 and 15 characters (got {0})")]
    TooShort(usize),
    #[error("nickname must be between 2 and 15 characters (got {0})")]
    TooLong(usize),
}

/// A locally validated nickname.
///
/// Validation happens before anything goes on the wire; an out-of-range
/// name never produces a join command. The server may still reject an
/// accepted name (e.g. a duplicate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    pub fn parse(raw: &str) -> Result<Self, NicknameError> {
        let trimmed = raw.trim();
        let chars = trimmed.chars().count();

        if chars < MIN_NICKNAME_CHARS {
            return Err(NicknameError::TooShort(chars));
        }
        if chars > MAX_NICKNAME_CHARS {
            return Err(NicknameError::TooLong(chars));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_lengths() {
        assert_eq!(Nickname::parse("Al").unwrap().as_str(), "Al");
        let fifteen = "a".repeat(15);
        assert_eq!(Nickname::parse(&fifteen).unwrap().as_str(), fifteen);
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert_eq!(Nickname::parse("A"), Err(NicknameError::TooShort(1)));
        assert_eq!(
            Nickname::parse(&"a".repeat(16)),
            Err(NicknameError::TooLong(16))
        );
        assert_eq!(Nickname::parse(""), Err(NicknameError::TooShort(0)));
    }

    #[test]
    fn trims_before_validating() {
        assert_eq!(Nickname::parse("  Al  ").unwrap().as_str(), "Al");
        assert_eq!(Nickname::parse("   A   "), Err(NicknameError::TooShort(1)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(Nickname::parse("éé").is_ok());
    }
}
