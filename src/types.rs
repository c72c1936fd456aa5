//! Core types shared across the crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    Minimize,
    /// Maximize the objective value.
    Maximize,
}

/// The orientation of a one-sided rank-sum test.
///
/// `Less` asserts that the first sample's values tend to be smaller than
/// the second sample's; `Greater` asserts the opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alternative {
    /// First sample is stochastically less than the second.
    Less,
    /// First sample is stochastically greater than the second.
    Greater,
}

impl Alternative {
    /// The opposite orientation.
    ///
    /// Swapping the two samples while flipping the alternative leaves the
    /// p-value unchanged.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
        }
    }
}
