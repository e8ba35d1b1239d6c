#![forbid(unsafe_code)]

pub mod api;
pub mod report;
pub mod series;
pub mod validation;

pub use api::{PiCheckError, PiCheckOptions, PiCheckResult, check_pi};
pub use report::{render_report, write_report};
pub use series::{
    DEFAULT_TERM_PAIRS, approximate_pi, approximate_pi_default, remainder_bound,
};
pub use validation::{PI_LOWER_BOUND, PI_UPPER_BOUND, ValidationError, validate_pi};
