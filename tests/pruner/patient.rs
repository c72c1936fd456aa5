use sigprune::pruner::{PatientPruner, Pruner, SignificancePruner};
use sigprune::{Direction, TrialSnapshot};

#[test]
fn delays_significance_pruner_verdict() {
    let pruner = PatientPruner::new(SignificancePruner::new(), 2);

    // Clear regression: the inner pruner recommends pruning every call.
    let best_values = [(0, 0.9), (1, 0.91), (2, 0.92), (3, 0.90), (4, 0.93)];
    let current_values = [(0, 0.5), (1, 0.51), (2, 0.49), (3, 0.52), (4, 0.50)];
    let best = TrialSnapshot::new(0, &best_values);
    let current = TrialSnapshot::new(1, &current_values);

    // First recommendation is absorbed by the patience window.
    assert!(!pruner.should_prune(&current, Some(&best), Direction::Maximize));
    // Second consecutive recommendation prunes.
    assert!(pruner.should_prune(&current, Some(&best), Direction::Maximize));
}

#[test]
fn recovery_resets_the_window() {
    let pruner = PatientPruner::new(SignificancePruner::new(), 2);

    let best_values = [(0, 0.9), (1, 0.91), (2, 0.92), (3, 0.90), (4, 0.93)];
    let bad_values = [(0, 0.5), (1, 0.51), (2, 0.49), (3, 0.52), (4, 0.50)];
    let fine_values = [(0, 0.89), (1, 0.905), (2, 0.915), (3, 0.895), (4, 0.925)];
    let best = TrialSnapshot::new(0, &best_values);

    // One bad decision, then the trial looks fine again: the counter resets.
    let bad = TrialSnapshot::new(1, &bad_values);
    assert!(!pruner.should_prune(&bad, Some(&best), Direction::Maximize));
    let fine = TrialSnapshot::new(1, &fine_values);
    assert!(!pruner.should_prune(&fine, Some(&best), Direction::Maximize));
    // The next bad decision starts a fresh window.
    assert!(!pruner.should_prune(&bad, Some(&best), Direction::Maximize));
    assert!(pruner.should_prune(&bad, Some(&best), Direction::Maximize));
}
