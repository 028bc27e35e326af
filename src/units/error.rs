use thiserror::Error;

/// Failure of a single normalization call.
///
/// Both variants are user errors: the caller shows the message and asks
/// again. Nothing in the normalizers treats bad input as a program defect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// No recognizable number/unit pattern (garbage text, unknown unit,
    /// a unit of the wrong dimension).
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Well-formed but physically impossible (negative magnitude,
    /// an inches part of 12 or more).
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl NormalizeError {
    pub fn format(msg: impl Into<String>) -> Self {
        NormalizeError::InvalidFormat(msg.into())
    }

    pub fn value(msg: impl Into<String>) -> Self {
        NormalizeError::InvalidValue(msg.into())
    }
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;
