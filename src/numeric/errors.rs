// ============================================================================
// Nullable Errors
// Error types for scanning, parsing and encoding nullable values
// ============================================================================

use std::fmt;
use std::num::ParseFloatError;
use std::str::Utf8Error;

/// Errors that can occur while converting a nullable value across a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NullableError {
    /// Driver value could not be interpreted as a float
    Conversion(String),
    /// Non-null text is not a valid 64-bit float
    Parse(ParseFloatError),
    /// Numeric text overflows f64 (holds the input)
    OutOfRange(String),
    /// Text input is not UTF-8
    InvalidUtf8(Utf8Error),
    /// XML reader or writer failed
    Xml(String),
}

impl fmt::Display for NullableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NullableError::Conversion(reason) => {
                write!(f, "conversion error: cannot scan driver value as float: {}", reason)
            },
            NullableError::Parse(err) => write!(f, "parse error: {}", err),
            NullableError::OutOfRange(input) => {
                write!(f, "parse error: value out of range for f64: {}", input)
            },
            NullableError::InvalidUtf8(err) => write!(f, "parse error: {}", err),
            NullableError::Xml(reason) => write!(f, "xml error: {}", reason),
        }
    }
}

impl std::error::Error for NullableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NullableError::Parse(err) => Some(err),
            NullableError::InvalidUtf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseFloatError> for NullableError {
    fn from(err: ParseFloatError) -> Self {
        NullableError::Parse(err)
    }
}

impl NullableError {
    /// Whether the error came from decoding text rather than from the
    /// driver or the XML reader.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            NullableError::Parse(_) | NullableError::OutOfRange(_) | NullableError::InvalidUtf8(_)
        )
    }
}

/// Result type alias for nullable conversions
pub type NullableResult<T> = Result<T, NullableError>;
