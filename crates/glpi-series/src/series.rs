#![forbid(unsafe_code)]

//! Gregory-Leibniz partial sums: pi = 4/1 - 4/3 + 4/5 - 4/7 + ...
//!
//! The series alternates and converges slowly (error ~ 1/n), so it is useful
//! as a deterministic workload and correctness probe, not as a fast way to
//! compute pi.

/// Term-pair count used by [`approximate_pi_default`] and the CLI.
pub const DEFAULT_TERM_PAIRS: u64 = 10_000;

/// Partial sum of the Gregory-Leibniz series over `term_pairs` pairs.
///
/// Each iteration folds in one positive and one negative term:
/// `+4/n` then `-4/(n+2)` with `n` stepping over the odd integers.
/// Plain f64 arithmetic, left-to-right accumulation order.
///
/// Infallible: `term_pairs == 0` returns `0.0`, and the denominator is
/// always odd and positive so no division by zero can occur.
#[must_use]
pub fn approximate_pi(term_pairs: u64) -> f64 {
    let mut accumulator = 0.0_f64;
    let mut denominator = 1_u64;
    for _ in 0..term_pairs {
        accumulator += 4.0 / denominator as f64;
        denominator += 2;
        accumulator -= 4.0 / denominator as f64;
        denominator += 2;
    }
    accumulator
}

/// Parameterless form fixed at [`DEFAULT_TERM_PAIRS`] pairs.
#[must_use]
pub fn approximate_pi_default() -> f64 {
    approximate_pi(DEFAULT_TERM_PAIRS)
}

/// Alternating-series remainder bound: `|S_t - pi| <= 4 / (4t + 1)`,
/// the magnitude of the first omitted term.
#[must_use]
pub fn remainder_bound(term_pairs: u64) -> f64 {
    4.0 / (4 * term_pairs + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use glpi_runtime::assert_close;

    // 1. Zero pairs -> empty sum
    #[test]
    fn test_series_zero_pairs_is_zero() {
        assert_eq!(approximate_pi(0), 0.0);
    }

    // 2. One pair -> 4/1 - 4/3 exactly
    #[test]
    fn test_series_one_pair() {
        assert_eq!(approximate_pi(1), 2.666_666_666_666_666_5);
    }

    // 3. Two pairs -> same accumulation order as the loop
    #[test]
    fn test_series_two_pairs() {
        let expected = 4.0 - 4.0 / 3.0 + 4.0 / 5.0 - 4.0 / 7.0;
        assert_eq!(approximate_pi(2), expected);
        assert_close(approximate_pi(2), 2.895_238_095_238_095_6, 1e-15, 0.0);
    }

    // 4. Default count lands inside the acceptance interval
    #[test]
    fn test_series_default_within_tolerance_interval() {
        let value = approximate_pi_default();
        assert!(value > 3.14149 && value < 3.14169, "got {value}");
        assert!((3.1415..=3.1416).contains(&value), "got {value}");
    }

    // 5. Parameterless form matches the explicit call
    #[test]
    fn test_series_default_matches_explicit() {
        assert_eq!(approximate_pi_default(), approximate_pi(DEFAULT_TERM_PAIRS));
    }

    // 6. Remainder bound holds at small counts
    #[test]
    fn test_series_remainder_bound_small_counts() {
        for t in 1..=64 {
            let err = (approximate_pi(t) - std::f64::consts::PI).abs();
            assert!(
                err <= remainder_bound(t),
                "t={t}: err={err} bound={}",
                remainder_bound(t)
            );
        }
    }

    // 7. Pair partial sums increase toward pi from below
    #[test]
    fn test_series_pair_sums_monotonic() {
        let mut previous = approximate_pi(0);
        for t in 1..=256 {
            let current = approximate_pi(t);
            assert!(current > previous, "t={t}: {current} <= {previous}");
            assert!(current < std::f64::consts::PI, "t={t}: {current}");
            previous = current;
        }
    }

    // 8. Result is finite for a spread of counts
    #[test]
    fn test_series_finite_for_large_counts() {
        for t in [1, 10, 10_000, 100_000] {
            assert!(approximate_pi(t).is_finite());
        }
    }
}
