//! `ols-select` library crate.
//!
//! Fits ordinary-least-squares linear models and searches over subsets of
//! candidate explanatory variables for the one judged best under a pluggable
//! fitness criterion.
//!
//! The crate is a pure library so that:
//!
//! - core logic is testable without any I/O surface
//! - callers (CLI front ends, notebooks, services) own ingestion and rendering
//! - search code stays deterministic and easy to reason about
//!
//! Entry points:
//!
//! - [`fit::select_best_fit`] — exhaustive subset search (parallel)
//! - [`fit::find_best_model`] — greedy backward elimination

pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
