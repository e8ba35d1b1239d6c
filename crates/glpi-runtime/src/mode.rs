#![forbid(unsafe_code)]

//! Runtime mode definitions for Strict (reference-compatible) and Hardened operation.

use serde::{Deserialize, Serialize};

/// Operational mode governing compatibility/safety trade-offs.
///
/// - **Strict**: Match the reference script's semantics exactly; the tolerance
///   check uses plain `<` / `>` comparisons, so NaN slips through both.
/// - **Hardened**: Extra safety layer beyond the reference; non-finite values
///   (NaN, ±inf) are rejected before the range check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeMode {
    Strict,
    Hardened,
}
