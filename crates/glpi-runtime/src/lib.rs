#![forbid(unsafe_code)]

//! Runtime infrastructure shared by the glpi series checker.
//!
//! ## Module layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | `mode`     | [`RuntimeMode`] enum (Strict / Hardened)              |
//! | `evidence` | [`CheckEvidenceLedger`], [`CheckEvidenceEntry`]       |

pub mod evidence;
pub mod mode;

pub use evidence::{CheckEvidenceEntry, CheckEvidenceLedger};
pub use mode::RuntimeMode;

/// Assert two f64 values are close within combined absolute and relative tolerance.
///
/// Uses the formula: |actual - expected| <= atol + rtol * |expected|
pub fn assert_close(actual: f64, expected: f64, atol: f64, rtol: f64) {
    let tol = atol + rtol * expected.abs();
    assert!(
        (actual - expected).abs() <= tol,
        "assert_close failed: actual={actual} expected={expected} diff={} tol={tol} (atol={atol}, rtol={rtol})",
        (actual - expected).abs()
    );
}

/// Check if a value is within absolute tolerance of expected.
#[must_use]
pub fn within_tolerance(actual: f64, expected: f64, atol: f64, rtol: f64) -> bool {
    let tol = atol + rtol * expected.abs();
    (actual - expected).abs() <= tol
}
