//! Greedy backward elimination.
//!
//! Starts from the full model, repeatedly drops the single variable whose
//! removal improves fitness the most, and stops when no removal improves on
//! the current model. O(k²) fits instead of the exhaustive search's O(2^k),
//! at the cost of optimality guarantees.

use serde::{Deserialize, Serialize};

use crate::domain::Model;
use crate::error::{FitError, Result};
use crate::fit::Criterion;

/// What to do when the best child scores exactly equal to the current model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// Stop the descent; only a strict improvement continues it.
    #[default]
    Stop,
    /// Keep descending on equal fitness, preferring the smaller model.
    Continue,
}

/// Backward elimination with the default tie policy ([`TiePolicy::Stop`]).
pub fn find_best_model(full_model: &Model, criterion: Criterion) -> Result<Model> {
    find_best_model_with(full_model, criterion, TiePolicy::Stop)
}

/// Backward elimination over `full_model`'s explanatory variables.
///
/// The full model's fitness is evaluated once as the baseline; a failure
/// there propagates immediately (there is nothing to search). Each step
/// evaluates every one-variable-removed child, disqualifying children whose
/// fit fails, and descends only while the best child improves on the current
/// model. The descent never produces a zero-variable model, and the current
/// model's fitness never worsens across it.
pub fn find_best_model_with(
    full_model: &Model,
    criterion: Criterion,
    ties: TiePolicy,
) -> Result<Model> {
    if full_model.explanatory().is_empty() {
        return Err(FitError::insufficient(
            "full model has no explanatory variables",
        ));
    }

    let mut current = full_model.clone();
    let baseline = criterion.evaluate(&current)?;
    current.set_fitness(baseline);

    while current.explanatory().len() > 1 {
        // All children failing to fit ends the descent; the current model is
        // still a valid answer.
        let Some(child) = best_sub_model(&current, criterion) else {
            break;
        };

        let advance = criterion.is_better(current.fitness(), child.fitness())
            || (ties == TiePolicy::Continue && child.fitness() == current.fitness());
        if !advance {
            break;
        }
        current = child;
    }

    Ok(current)
}

/// Best-scoring model with exactly one variable removed from `model`.
///
/// Children are compared only against each other here; the caller decides
/// whether the winner actually beats the parent. `None` when every child
/// fails to fit.
fn best_sub_model(model: &Model, criterion: Criterion) -> Option<Model> {
    let mut best: Option<Model> = None;

    for index in 0..model.explanatory().len() {
        let mut child = model.clone();
        child.remove_explanatory(index);

        let Ok(score) = criterion.evaluate(&child) else {
            continue;
        };
        child.set_fitness(score);

        let replace = match &best {
            None => true,
            Some(current) => criterion.is_better(current.fitness(), score),
        };
        if replace {
            best = Some(child);
        }
    }

    best
}
