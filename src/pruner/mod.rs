//! Pruner trait and implementations for trial pruning.
//!
//! Pruners decide whether to stop (prune) a running trial early based on
//! its intermediate values compared to the best trial seen so far. This is
//! useful for discarding unpromising trials before they complete, saving
//! compute. Enforcement is the host optimizer's job — a pruner only answers
//! "should I stop?".

mod nop;
mod patient;
mod significance;

pub use nop::NopPruner;
pub use patient::PatientPruner;
pub use significance::SignificancePruner;

use crate::trial::TrialSnapshot;
use crate::types::Direction;

/// Trait for pluggable trial pruning strategies.
///
/// Pruners are consulted after each intermediate value is reported to
/// decide whether the trial should be stopped early. The trait requires
/// `Send + Sync` to support concurrent and async optimization.
///
/// # Implementing a custom pruner
///
/// ```
/// use sigprune::pruner::Pruner;
/// use sigprune::{Direction, TrialSnapshot};
///
/// struct StepLimitPruner {
///     max_steps: usize,
/// }
///
/// impl Pruner for StepLimitPruner {
///     fn should_prune(
///         &self,
///         current: &TrialSnapshot<'_>,
///         _best: Option<&TrialSnapshot<'_>>,
///         _direction: Direction,
///     ) -> bool {
///         // Prune any trial that has run longer than the step budget
///         current.len() > self.max_steps
///     }
/// }
/// ```
pub trait Pruner: Send + Sync {
    /// Decide whether to prune the current trial.
    ///
    /// # Arguments
    ///
    /// * `current` - Snapshot of the running trial's intermediate values.
    /// * `best` - Snapshot of the study's best trial so far, or `None` if
    ///   no comparable trial has been established yet.
    /// * `direction` - The study's optimization direction.
    fn should_prune(
        &self,
        current: &TrialSnapshot<'_>,
        best: Option<&TrialSnapshot<'_>>,
        direction: Direction,
    ) -> bool;
}
