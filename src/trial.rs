//! Point-in-time views of a running trial's intermediate values.

/// An immutable snapshot of a trial at decision time.
///
/// Borrows the `(step, value)` pairs the trial has reported so far. The
/// pruners only use the multiset of values — the steps are carried because
/// that is how host optimizers store intermediate reports, and they keep
/// snapshots cheap to build from existing storage without copying.
///
/// A snapshot is constructed fresh for each pruning decision and never
/// retained. Callers must ensure it is a consistent view: the underlying
/// value store must not be appended to while a decision runs.
///
/// # Examples
///
/// ```
/// use sigprune::TrialSnapshot;
///
/// let values = [(0, 0.91), (1, 0.93), (2, 0.92)];
/// let snapshot = TrialSnapshot::new(4, &values);
/// assert_eq!(snapshot.len(), 3);
/// assert!((snapshot.mean().unwrap() - 0.92).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TrialSnapshot<'a> {
    id: u64,
    intermediate_values: &'a [(u64, f64)],
}

impl<'a> TrialSnapshot<'a> {
    /// Create a snapshot from a trial's id and reported `(step, value)` pairs.
    #[must_use]
    pub fn new(id: u64, intermediate_values: &'a [(u64, f64)]) -> Self {
        Self {
            id,
            intermediate_values,
        }
    }

    /// The trial's unique identifier.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The number of intermediate values reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intermediate_values.len()
    }

    /// Whether the trial has reported no values yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intermediate_values.is_empty()
    }

    /// The reported values, in report order, without their steps.
    #[must_use]
    pub fn sample(&self) -> Vec<f64> {
        self.intermediate_values.iter().map(|&(_, v)| v).collect()
    }

    /// Arithmetic mean of the reported values.
    ///
    /// Recomputed on every call so a snapshot built over fresh data can
    /// never serve a stale mean. Returns `None` for an empty sample.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        if self.intermediate_values.is_empty() {
            return None;
        }
        let sum: f64 = self.intermediate_values.iter().map(|&(_, v)| v).sum();
        Some(sum / self.intermediate_values.len() as f64)
    }
}
