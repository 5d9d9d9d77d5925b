//! Exhaustive subset selection.
//!
//! Every non-empty subset of the base model's explanatory variables is a
//! candidate. Candidates are enumerated in a fixed order (ascending bit
//! mask), partitioned into fixed-size chunks, and evaluated in parallel; each
//! chunk keeps its local best and a final sequential reduction picks the
//! global best.
//!
//! Determinism: enumeration order is independent of worker scheduling, the
//! comparator is strict, and both the chunk-local and global reductions break
//! ties toward the earliest-enumerated candidate, so repeated runs always
//! return the same model.
//!
//! Cost is O(2^k) fits regardless of parallelism; chunking only spreads the
//! constant factor across available workers.

use rayon::prelude::*;

use crate::domain::Model;
use crate::error::{FitError, Result};
use crate::fit::Criterion;

/// Candidates evaluated per worker chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Options for exhaustive selection.
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// Number of candidate models each parallel worker evaluates.
    pub chunk_size: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Enumerate one candidate model per non-empty subset of `base`'s
/// explanatory variables.
///
/// Candidate order is deterministic: ascending mask value, where bit `j` of
/// the mask selects variable `j`. Variable order inside each candidate
/// follows the base model. Exactly `2^k − 1` candidates are produced.
pub fn subset_models(base: &Model) -> Result<Vec<Model>> {
    let vars = base.explanatory();
    let k = vars.len();
    if k == 0 {
        return Err(FitError::insufficient(
            "base model has no explanatory variables",
        ));
    }
    if k >= 63 {
        return Err(FitError::insufficient(
            "exhaustive search supports at most 62 explanatory variables",
        ));
    }

    let count = 1u64 << k;
    let mut models = Vec::with_capacity((count - 1) as usize);
    for mask in 1..count {
        let subset = vars
            .iter()
            .enumerate()
            .filter(|(j, _)| mask & (1u64 << j) != 0)
            .map(|(_, v)| v.clone())
            .collect();
        models.push(Model::new(base.response().clone(), subset));
    }
    Ok(models)
}

/// Select the best-scoring subset of `base`'s explanatory variables.
///
/// A candidate whose fit fails is disqualified, not fatal; the search only
/// fails with `NonFittableModel` when no candidate anywhere could be scored.
/// The returned model carries its fitness under `criterion`.
pub fn select_best_fit(
    base: &Model,
    criterion: Criterion,
    options: &SelectionOptions,
) -> Result<Model> {
    let candidates = subset_models(base)?;
    let chunk_size = options.chunk_size.max(1);

    // One worker per chunk; each owns a disjoint slice of the candidate
    // list, so no shared mutable state during evaluation. `collect` keeps
    // the per-chunk results in chunk order for the deterministic reduction.
    let chunk_bests: Vec<Model> = candidates
        .par_chunks(chunk_size)
        .filter_map(|chunk| chunk_best(criterion, chunk))
        .collect();

    let mut best: Option<Model> = None;
    for model in chunk_bests {
        let replace = match &best {
            None => true,
            Some(current) => criterion.is_better(current.fitness(), model.fitness()),
        };
        if replace {
            best = Some(model);
        }
    }

    best.ok_or_else(|| FitError::non_fittable("no candidate subset could be fitted"))
}

/// Best-scoring model within one chunk, ties going to the earliest
/// candidate. `None` when every candidate in the chunk fails to fit.
fn chunk_best(criterion: Criterion, chunk: &[Model]) -> Option<Model> {
    let mut best: Option<Model> = None;
    for candidate in chunk {
        let Ok(score) = criterion.evaluate(candidate) else {
            continue;
        };
        let replace = match &best {
            None => true,
            Some(current) => criterion.is_better(current.fitness(), score),
        };
        if replace {
            let mut scored = candidate.clone();
            scored.set_fitness(score);
            best = Some(scored);
        }
    }
    best
}
