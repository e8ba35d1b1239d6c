#![forbid(unsafe_code)]

use std::io;

use glpi_runtime::{CheckEvidenceEntry, CheckEvidenceLedger, RuntimeMode};
use thiserror::Error;

use crate::report::write_report;
use crate::series::{DEFAULT_TERM_PAIRS, approximate_pi, remainder_bound};
use crate::validation::{PI_LOWER_BOUND, PI_UPPER_BOUND, ValidationError, validate_pi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiCheckOptions {
    pub term_pairs: u64,
    pub mode: RuntimeMode,
    pub emit_report: bool,
}

impl Default for PiCheckOptions {
    fn default() -> Self {
        Self {
            term_pairs: DEFAULT_TERM_PAIRS,
            mode: RuntimeMode::Strict,
            emit_report: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PiCheckResult {
    pub value: f64,
    pub term_pairs: u64,
    pub remainder_bound: f64,
}

#[derive(Debug, Error)]
pub enum PiCheckError {
    #[error("report write failed: {0}")]
    Report(#[from] io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Single-shot pipeline: approximate, report, record evidence, validate.
///
/// The report line is written BEFORE the tolerance check runs, so an
/// out-of-tolerance value still produces a `pi = <value>` line on `out`.
/// The evidence entry is recorded whether or not validation passes.
pub fn check_pi<W: io::Write>(
    out: &mut W,
    options: &PiCheckOptions,
    ledger: &mut CheckEvidenceLedger,
) -> Result<PiCheckResult, PiCheckError> {
    let value = approximate_pi(options.term_pairs);

    if options.emit_report {
        write_report(out, value)?;
    }

    let outcome = validate_pi(value, options.mode);
    ledger.record(CheckEvidenceEntry {
        mode: options.mode,
        term_pairs: options.term_pairs,
        value,
        lower: PI_LOWER_BOUND,
        upper: PI_UPPER_BOUND,
        accepted: outcome.is_ok(),
        reason: outcome.as_ref().err().map(ToString::to_string),
    });
    let value = outcome?;

    Ok(PiCheckResult {
        value,
        term_pairs: options.term_pairs,
        remainder_bound: remainder_bound(options.term_pairs),
    })
}
