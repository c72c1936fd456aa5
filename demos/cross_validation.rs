//! Cross-validation pruning — stop clearly inferior configurations early.
//!
//! Each candidate configuration is evaluated fold by fold. After every fold
//! the significance pruner compares the candidate's scores so far against
//! the best completed candidate, and kills it once the gap is statistically
//! significant — saving the remaining folds.
//!
//! Run with: `cargo run --example cross_validation`

use sigprune::prelude::*;

fn mean(values: &[(u64, f64)]) -> f64 {
    values.iter().map(|&(_, v)| v).sum::<f64>() / values.len() as f64
}

fn main() {
    let pruner = SignificancePruner::new(); // alpha = 0.05
    let n_folds: u64 = 8;

    // Candidate "hyperparameter" settings: each yields a base accuracy,
    // with deterministic per-fold jitter standing in for fold noise.
    let candidates = [0.91, 0.62, 0.89, 0.55, 0.93, 0.70];

    let mut best: Option<(u64, Vec<(u64, f64)>)> = None;
    let mut n_pruned = 0;

    for (i, &base) in candidates.iter().enumerate() {
        let id = i as u64;
        let mut reports: Vec<(u64, f64)> = Vec::new();
        let mut pruned_at = None;

        for fold in 0..n_folds {
            let jitter = 0.01 * (fold as f64 * 1.3 + id as f64).sin();
            reports.push((fold, base + jitter));

            // Ask the pruner after each fold's score is reported.
            let current = TrialSnapshot::new(id, &reports);
            let best_snapshot = best
                .as_ref()
                .map(|(best_id, values)| TrialSnapshot::new(*best_id, values));
            if pruner.should_prune(&current, best_snapshot.as_ref(), Direction::Maximize) {
                pruned_at = Some(fold);
                break;
            }
        }

        if let Some(fold) = pruned_at {
            n_pruned += 1;
            println!(
                "trial {id}: pruned after fold {fold} (mean so far {:.3})",
                mean(&reports)
            );
        } else {
            let trial_mean = mean(&reports);
            println!("trial {id}: completed all folds, mean accuracy {trial_mean:.3}");
            let is_new_best = best
                .as_ref()
                .is_none_or(|(_, values)| trial_mean > mean(values));
            if is_new_best {
                best = Some((id, reports));
            }
        }
    }

    if let Some((best_id, values)) = best {
        println!(
            "\nbest trial: {best_id} with mean accuracy {:.3} ({n_pruned} of {} trials pruned)",
            mean(&values),
            candidates.len()
        );
    }
}
