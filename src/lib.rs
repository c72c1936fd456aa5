#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Statistical-significance trial pruning for hyperparameter search.
//!
//! During an iterative optimization run (cross-validation folds, training
//! epochs), each trial reports intermediate performance values as it goes.
//! This crate answers one question at each report: *is this trial already
//! so clearly worse than the best trial seen so far that finishing it would
//! waste compute?* The answer is backed by a one-sided Mann-Whitney U
//! (rank-sum) test rather than a raw comparison, so a noisy dip doesn't
//! kill a promising trial.
//!
//! # Getting Started
//!
//! ```
//! use sigprune::prelude::*;
//!
//! let pruner = SignificancePruner::new();
//!
//! // Snapshots come from the host optimizer: the running trial and the
//! // study's best trial so far, as (step, value) pairs.
//! let current_values = [(0, 0.50), (1, 0.51), (2, 0.49), (3, 0.52), (4, 0.50)];
//! let current = TrialSnapshot::new(7, &current_values);
//! let best_values = [(0, 0.90), (1, 0.91), (2, 0.92), (3, 0.90), (4, 0.93)];
//! let best = TrialSnapshot::new(2, &best_values);
//!
//! // Accuracy is maximized; the current trial is significantly worse.
//! assert!(pruner.should_prune(&current, Some(&best), Direction::Maximize));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Pruner`](pruner::Pruner) | The seam to the host optimizer: one `should_prune` operation per intermediate report. |
//! | [`SignificancePruner`](pruner::SignificancePruner) | Prune only when the current trial is *statistically significantly* worse than the best. |
//! | [`PatientPruner`](pruner::PatientPruner) | Wrapper requiring N consecutive prune recommendations before acting. |
//! | [`NopPruner`](pruner::NopPruner) | Never prunes — the default when no pruner is configured. |
//! | [`TrialSnapshot`] | Immutable point-in-time view of a trial's intermediate values. |
//! | [`Direction`] | Whether the study minimizes or maximizes the objective value. |
//! | [`stats::rank_sum_pvalue`] | The underlying one-sided Mann-Whitney U test, usable standalone. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public enums | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for each pruning decision | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod pruner;
pub mod stats;
mod trial;
mod types;

pub use error::{Error, Result};
pub use trial::TrialSnapshot;
pub use types::{Alternative, Direction};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use sigprune::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pruner::{NopPruner, PatientPruner, Pruner, SignificancePruner};
    pub use crate::stats::rank_sum_pvalue;
    pub use crate::trial::TrialSnapshot;
    pub use crate::types::{Alternative, Direction};
}
