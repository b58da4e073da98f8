use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("unsupported power of ten {position}")]
    UnknownPosition { position: i32 },

    #[error("digit {digit} out of range 1-{max} at power of ten {position}")]
    DigitOutOfRange { position: i32, digit: i32, max: i32 },

    #[error("value {value} out of range {min}-{max}")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },
}

impl RomanError {
    /// End-user wording for embedders that surface errors from `try_generate`.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::ValueOutOfRange { value, min, max } => format!(
                "{} cannot be written as a Roman numeral; use a number from {} to {}",
                value, min, max
            ),
            RomanError::UnknownPosition { .. } | RomanError::DigitOutOfRange { .. } => {
                format!("Internal lookup failed: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_offending_value() {
        let err = RomanError::DigitOutOfRange {
            position: 3,
            digit: 4,
            max: 3,
        };
        assert_eq!(err.to_string(), "digit 4 out of range 1-3 at power of ten 3");

        let err = RomanError::UnknownPosition { position: 4 };
        assert_eq!(err.to_string(), "unsupported power of ten 4");
    }

    #[test]
    fn test_user_friendly_message() {
        let err = RomanError::ValueOutOfRange {
            value: 4000,
            min: 1,
            max: 3999,
        };
        assert!(err.user_friendly_message().contains("from 1 to 3999"));
    }
}
