//! Error types for MetriCal

use thiserror::Error;

/// Errors that can occur during calculation
///
/// Every precondition failure carries a human-readable message naming exactly
/// what was violated. Validation is eager; the first failure propagates to
/// the caller unchanged and no partial results are produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Shorthand used at every validation site
    pub fn invalid(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }
}

/// Guard helper: fail with `InvalidInput` unless the condition holds.
///
/// This is the single precondition-check primitive the calculators build on;
/// callers early-return with `?`.
pub fn require(condition: bool, msg: &str) -> Result<(), CalcError> {
    if condition {
        Ok(())
    } else {
        Err(CalcError::invalid(msg))
    }
}
