//! Conversion error types

use thiserror::Error;
use watson_vm::Kind;

/// Error converting a `Value` into native data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The value's kind has no conversion rule for the requested type.
    #[error("unsupported type: cannot convert {found} to {expected}")]
    UnsupportedType {
        expected: &'static str,
        found: Kind,
    },

    /// A string (or object key) is not valid UTF-8.
    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(String),

    /// JSON has no representation for NaN or infinities.
    #[error("non-finite float {0} has no JSON representation")]
    NonFiniteFloat(f64),
}

impl ConvertError {
    pub fn unsupported(expected: &'static str, found: Kind) -> Self {
        ConvertError::UnsupportedType { expected, found }
    }
}

/// Result type alias for conversions
pub type ConvertResult<T> = Result<T, ConvertError>;
