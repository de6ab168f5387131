//! Error taxonomy for p-adic construction and arithmetic.

use thiserror::Error;

/// Errors raised while building or operating on p-adic values.
///
/// Every variant is detected at the point of the operation and returned
/// immediately. None of them arise from the arithmetic engine itself once
/// the inputs are valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PAdicError {
    /// A digit outside `[0, base)` was supplied to a constructor.
    #[error("digit {digit} is out of range for base {base}")]
    InvalidDigit {
        /// The offending digit.
        digit: u32,
        /// The exclusive upper bound it was checked against.
        base: u32,
    },

    /// A character could not be read as a digit, or the notation is malformed.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The character that was rejected.
        character: char,
        /// Zero-based character position in the input.
        position: usize,
    },

    /// The requested base is not a supported prime.
    #[error("the base of a p-adic number must be a prime no larger than 36, got {base}")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },

    /// The value has a genuine repeating tail and has no finite integer form.
    #[error("{value} is not finite")]
    NotFinite {
        /// Rendering of the value that was converted.
        value: String,
    },

    /// The operation is deliberately not implemented for p-adic integers.
    #[error("{operation} is not supported for p-adic integers")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A sampling standard deviation is negative, too large, or not a number.
    #[error("{field} must be a finite standard deviation between 0 and 1000")]
    InvalidSigma {
        /// The `SamplingConfig` field that was rejected.
        field: &'static str,
    },

    /// A binary operation mixed values of two different bases.
    #[error("cannot combine a {left}-adic value with a {right}-adic value")]
    BaseMismatch {
        /// Base of the left operand.
        left: u8,
        /// Base of the right operand.
        right: u8,
    },
}

impl PAdicError {
    /// Create an InvalidDigit error.
    pub fn invalid_digit(digit: impl Into<u32>, base: impl Into<u32>) -> Self {
        Self::InvalidDigit {
            digit: digit.into(),
            base: base.into(),
        }
    }

    /// Create an Unsupported error.
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PAdicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            PAdicError::invalid_digit(7u8, 5u8).to_string(),
            "digit 7 is out of range for base 5"
        );
        assert_eq!(
            PAdicError::InvalidBase { base: 4 }.to_string(),
            "the base of a p-adic number must be a prime no larger than 36, got 4"
        );
        assert_eq!(
            PAdicError::unsupported("reciprocal").to_string(),
            "reciprocal is not supported for p-adic integers"
        );
        assert_eq!(
            PAdicError::BaseMismatch { left: 3, right: 5 }.to_string(),
            "cannot combine a 3-adic value with a 5-adic value"
        );
        assert_eq!(
            PAdicError::InvalidSigma {
                field: "head_sigma"
            }
            .to_string(),
            "head_sigma must be a finite standard deviation between 0 and 1000"
        );
    }

    #[test]
    fn variants_compare_structurally() {
        assert_eq!(
            PAdicError::invalid_digit(3u8, 2u8),
            PAdicError::InvalidDigit { digit: 3, base: 2 }
        );
        assert_ne!(
            PAdicError::unsupported("reciprocal"),
            PAdicError::unsupported("division")
        );
    }
}
