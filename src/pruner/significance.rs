//! Significance pruner — statistically rigorous pruning for repeated trainings.
//!
//! Compares the current trial's intermediate values against the best
//! trial's with a one-sided Mann-Whitney U test and prunes only when the
//! current trial is significantly worse. Designed for settings like cross
//! validation where each trial reports a sequence of comparable scores.
//!
//! Because the test looks at the full distribution of both trials' values,
//! a single noisy fold won't trigger pruning the way a raw mean comparison
//! would.
//!
//! # When to use
//!
//! - When intermediate values are noisy (fold scores, stochastic rewards)
//! - When you want a statistical guarantee that pruned trials are truly worse
//! - Works from the very first report, but gains power as values accumulate
//!   (roughly 5 values per trial for full separation to become significant)
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `alpha` | 0.05 | Significance level — lower is more conservative |
//!
//! # Example
//!
//! ```
//! use sigprune::pruner::SignificancePruner;
//!
//! let pruner = SignificancePruner::new().alpha(0.01);
//! ```

use super::Pruner;
use crate::error::Error;
use crate::stats::rank_sum_pvalue;
use crate::trial::TrialSnapshot;
use crate::types::{Alternative, Direction};

/// Prune trials whose intermediate values are statistically significantly
/// worse than the best trial's, per a one-sided Mann-Whitney U test.
///
/// The decision at each report:
///
/// 1. No best trial yet → never prune.
/// 2. Current trial's mean is at or ahead of the best trial's mean for the
///    study direction → never prune. Significance testing only
///    investigates apparent regressions, not ties or improvements.
/// 3. Otherwise, test whether the current trial's values are significantly
///    worse than the best trial's. Prune iff `p < alpha`.
///
/// The pruner is stateless apart from the configured `alpha`; every
/// decision is a pure function of the snapshots and direction passed in,
/// so one instance can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use sigprune::pruner::SignificancePruner;
///
/// let pruner = SignificancePruner::new().alpha(0.05);
/// ```
pub struct SignificancePruner {
    /// Significance level (default 0.05). Lower = more conservative.
    alpha: f64,
}

impl SignificancePruner {
    /// Create a new `SignificancePruner` with the default `alpha` of 0.05.
    #[must_use]
    pub fn new() -> Self {
        Self { alpha: 0.05 }
    }

    /// Set the significance level.
    ///
    /// Must be in (0.0, 1.0). Lower values require stronger evidence
    /// before pruning.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in the open interval (0.0, 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "alpha must be in (0.0, 1.0), got {alpha}"
        );
        self.alpha = alpha;
        self
    }
}

impl Default for SignificancePruner {
    fn default() -> Self {
        Self::new()
    }
}

impl Pruner for SignificancePruner {
    fn should_prune(
        &self,
        current: &TrialSnapshot<'_>,
        best: Option<&TrialSnapshot<'_>>,
        direction: Direction,
    ) -> bool {
        // No best trial established yet — nothing to compare against.
        let Some(best) = best else {
            return false;
        };

        // Means are recomputed from the snapshots; either side empty means
        // no comparison is possible.
        let (Some(current_mean), Some(best_mean)) = (current.mean(), best.mean()) else {
            return false;
        };

        // Only investigate apparent regressions. A trial at or ahead of
        // the best is never pruned.
        let trending_worse = match direction {
            Direction::Maximize => current_mean < best_mean,
            Direction::Minimize => current_mean > best_mean,
        };
        if !trending_worse {
            return false;
        }

        // Orient the one-sided test: when maximizing, "worse" means the
        // current trial's values are less than the best's; when
        // minimizing, greater.
        let alternative = match direction {
            Direction::Maximize => Alternative::Less,
            Direction::Minimize => Alternative::Greater,
        };

        match rank_sum_pvalue(&current.sample(), &best.sample(), alternative) {
            Ok(p_value) => {
                trace_debug!(
                    trial_id = current.id(),
                    best_trial_id = best.id(),
                    p_value,
                    alpha = self.alpha,
                    "significance test"
                );
                if p_value < self.alpha {
                    trace_info!(
                        trial_id = current.id(),
                        p_value,
                        "trial significantly worse than best, pruning"
                    );
                    true
                } else {
                    false
                }
            }
            // Sparse early reporting: too few values or no rank variance.
            // Significance cannot be established, so default to keeping
            // the trial alive.
            Err(Error::EmptySample | Error::InsufficientVariance) => false,
        }
    }
}
