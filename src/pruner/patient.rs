use std::collections::HashMap;
use std::sync::Mutex;

use super::Pruner;
use crate::trial::TrialSnapshot;
use crate::types::Direction;

/// Wraps another pruner and adds a patience window.
///
/// The inner pruner must recommend pruning for `patience` consecutive
/// decisions before this pruner actually prunes the trial. This is useful
/// to prevent premature pruning when intermediate values are noisy.
///
/// # Examples
///
/// ```
/// use sigprune::pruner::{PatientPruner, SignificancePruner};
///
/// // Only prune after the significance test fires 3 times in a row
/// let inner = SignificancePruner::new();
/// let pruner = PatientPruner::new(inner, 3);
/// ```
pub struct PatientPruner {
    inner: Box<dyn Pruner>,
    patience: u64,
    /// Track consecutive prune recommendations per trial.
    consecutive_counts: Mutex<HashMap<u64, u64>>,
}

impl PatientPruner {
    /// Create a new `PatientPruner` wrapping the given inner pruner.
    ///
    /// The inner pruner must recommend pruning for `patience` consecutive
    /// calls before this pruner returns `true`.
    ///
    /// # Panics
    ///
    /// Panics if `patience` is 0.
    #[must_use]
    pub fn new(inner: impl Pruner + 'static, patience: u64) -> Self {
        assert!(patience >= 1, "patience must be >= 1, got {patience}");
        Self {
            inner: Box::new(inner),
            patience,
            consecutive_counts: Mutex::new(HashMap::new()),
        }
    }
}

impl Pruner for PatientPruner {
    fn should_prune(
        &self,
        current: &TrialSnapshot<'_>,
        best: Option<&TrialSnapshot<'_>>,
        direction: Direction,
    ) -> bool {
        let inner_says_prune = self.inner.should_prune(current, best, direction);
        let mut counts = self.consecutive_counts.lock().expect("lock poisoned");
        let count = counts.entry(current.id()).or_insert(0);
        if inner_says_prune {
            *count += 1;
            *count >= self.patience
        } else {
            *count = 0;
            false
        }
    }
}
