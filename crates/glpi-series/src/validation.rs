#![forbid(unsafe_code)]

use glpi_runtime::RuntimeMode;
use thiserror::Error;

/// Closed acceptance interval for the computed approximation.
pub const PI_LOWER_BOUND: f64 = 3.1415;
pub const PI_UPPER_BOUND: f64 = 3.1416;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unexpected pi value: {value} outside [{lower}, {upper}]")]
    ToleranceExceeded { value: f64, lower: f64, upper: f64 },
    #[error("pi approximation is not finite: {value}")]
    NotFinite { value: f64 },
}

/// Check that `value` lies within the closed interval
/// [[`PI_LOWER_BOUND`], [`PI_UPPER_BOUND`]], returning it unchanged on success.
///
/// Strict mode reproduces the reference comparison exactly:
/// `value < lower || value > upper`. Both comparisons are false for NaN, so
/// NaN passes in Strict mode. Hardened mode rejects non-finite values first.
pub fn validate_pi(value: f64, mode: RuntimeMode) -> Result<f64, ValidationError> {
    if mode == RuntimeMode::Hardened && !value.is_finite() {
        return Err(ValidationError::NotFinite { value });
    }
    if value < PI_LOWER_BOUND || value > PI_UPPER_BOUND {
        return Err(ValidationError::ToleranceExceeded {
            value,
            lower: PI_LOWER_BOUND,
            upper: PI_UPPER_BOUND,
        });
    }
    Ok(value)
}
