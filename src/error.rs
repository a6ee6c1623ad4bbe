//! Error types shared by the calculators

use thiserror::Error;

/// Failure raised by a calculator before any computation starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A parameter that must be a finite, non-negative number was not, or it
    /// pushed the result past the `f64` range
    #[error("invalid argument `{parameter}`: expected a non-negative number, got {value}")]
    InvalidArgument {
        parameter: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Reject negative or non-finite values
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidArgument { parameter, value })
    }
}

/// Whole-period counts are signed so callers can hand us raw user input
pub(crate) fn ensure_non_negative_count(parameter: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| CalcError::InvalidArgument {
        parameter,
        value: f64::from(value),
    })
}
