use super::Pruner;
use crate::trial::TrialSnapshot;
use crate::types::Direction;

/// A pruner that never prunes. This is the default when no pruner is configured.
pub struct NopPruner;

impl Pruner for NopPruner {
    fn should_prune(
        &self,
        _current: &TrialSnapshot<'_>,
        _best: Option<&TrialSnapshot<'_>>,
        _direction: Direction,
    ) -> bool {
        false
    }
}
