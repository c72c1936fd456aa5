use sigprune::pruner::{Pruner, SignificancePruner};
use sigprune::{Direction, TrialSnapshot};

/// Helper to build (step, value) pairs from plain values.
fn steps(values: &[f64]) -> Vec<(u64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as u64, v))
        .collect()
}

// --- No best trial ---

#[test]
fn never_prunes_without_best_trial() {
    let pruner = SignificancePruner::new();
    let values = steps(&[0.0, 0.0, 0.0, 0.0, 0.0]);
    let current = TrialSnapshot::new(0, &values);
    // Even a terrible trial is kept when there is nothing to compare against.
    assert!(!pruner.should_prune(&current, None, Direction::Maximize));
    assert!(!pruner.should_prune(&current, None, Direction::Minimize));
}

// --- Maximize direction ---

#[test]
fn prunes_clear_regression_maximize() {
    let pruner = SignificancePruner::new();
    let best_values = steps(&[0.9, 0.91, 0.92, 0.90, 0.93]);
    let current_values = steps(&[0.5, 0.51, 0.49, 0.52, 0.50]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    // All current values sit far below all best values: p ≈ 0.006 < 0.05.
    assert!(pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn keeps_near_identical_trial_maximize() {
    let pruner = SignificancePruner::new();
    let best_values = steps(&[0.9, 0.91, 0.92, 0.90, 0.93]);
    let current_values = steps(&[0.89, 0.905, 0.915, 0.895, 0.925]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    // Slightly behind on the mean, but fully overlapping: p ≈ 0.26.
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn never_prunes_trial_ahead_of_best() {
    let pruner = SignificancePruner::new();
    let best_values = steps(&[0.5, 0.51, 0.49]);
    let current_values = steps(&[0.9, 0.91, 0.92]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    // The current trial is *better* — no regression to investigate.
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn never_prunes_on_exact_tie() {
    let pruner = SignificancePruner::new();
    let values = steps(&[0.7, 0.8, 0.9]);
    let best = TrialSnapshot::new(0, &values);
    let current = TrialSnapshot::new(1, &values);
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Maximize));
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Minimize));
}

// --- Minimize direction ---

#[test]
fn prunes_clear_regression_minimize() {
    let pruner = SignificancePruner::new();
    let best_values = steps(&[0.1, 0.11, 0.09, 0.12, 0.10]);
    let current_values = steps(&[0.9, 0.91, 0.89, 0.92, 0.90]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    assert!(pruner.should_prune(&current, Some(&best), Direction::Minimize));
}

#[test]
fn keeps_small_samples_minimize() {
    let pruner = SignificancePruner::new();
    // Overlapping distributions at n=2: far too little evidence.
    let best_values = steps(&[1.0, 2.0]);
    let current_values = steps(&[1.5, 2.5]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Minimize));
}

#[test]
fn keeps_fully_separated_tiny_samples() {
    let pruner = SignificancePruner::new();
    // Even total separation at n=2 cannot reach significance.
    let best_values = steps(&[1.0, 2.0]);
    let current_values = steps(&[10.0, 11.0]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Minimize));
}

// --- Sparse early reporting ---

#[test]
fn single_value_yields_verdict_without_error() {
    let pruner = SignificancePruner::new();
    let best_values = steps(&[0.9, 0.91, 0.92, 0.90, 0.93]);
    let current_values = steps(&[0.2]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    // A single value against five best values bottoms out at p ≈ 0.12:
    // low-powered, so the trial survives.
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn single_value_can_prune_against_long_best_history() {
    let pruner = SignificancePruner::new();
    // With 50 best values, one value below all of them reaches p ≈ 0.048.
    let best_values: Vec<(u64, f64)> = (0..50).map(|s| (s, 0.9 + 0.001 * s as f64)).collect();
    let current_values = steps(&[0.2]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    assert!(pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn empty_current_trial_is_kept() {
    let pruner = SignificancePruner::new();
    let best_values = steps(&[0.9, 0.91, 0.92]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &[]);
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn empty_best_trial_is_kept() {
    let pruner = SignificancePruner::new();
    let current_values = steps(&[0.9, 0.91, 0.92]);
    let best = TrialSnapshot::new(0, &[]);
    let current = TrialSnapshot::new(1, &current_values);
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Minimize));
}

#[test]
fn flat_identical_trials_are_kept() {
    let pruner = SignificancePruner::new();
    // Both trials flat at the same value. The means tie, so the
    // trending-worse gate keeps the trial before the (variance-free)
    // rank-sum test is ever consulted.
    let best_values = steps(&[1.0, 1.0, 1.0]);
    let current_values = steps(&[1.0, 1.0]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Minimize));
}

// --- Alpha threshold ---

#[test]
fn lower_alpha_is_more_conservative() {
    let strict = SignificancePruner::new().alpha(0.001);
    let default = SignificancePruner::new();

    // p ≈ 0.006: prunes at alpha 0.05 but not at alpha 0.001.
    let best_values = steps(&[0.9, 0.91, 0.92, 0.90, 0.93]);
    let current_values = steps(&[0.5, 0.51, 0.49, 0.52, 0.50]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);

    assert!(default.should_prune(&current, Some(&best), Direction::Maximize));
    assert!(!strict.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn threshold_is_strict() {
    // With alpha raised above the scenario's p-value the trial is pruned;
    // the comparison is p < alpha, never p <= alpha.
    let lenient = SignificancePruner::new().alpha(0.3);
    let best_values = steps(&[0.9, 0.91, 0.92, 0.90, 0.93]);
    let current_values = steps(&[0.89, 0.905, 0.915, 0.895, 0.925]);
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);
    // p ≈ 0.265 < 0.3 → prune at the lenient threshold.
    assert!(lenient.should_prune(&current, Some(&best), Direction::Maximize));
}
