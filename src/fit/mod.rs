//! Model search orchestration.
//!
//! Responsibilities:
//!
//! - score candidate models under a fitness criterion ([`Criterion`])
//! - enumerate and evaluate every variable subset (parallel) ([`select_best_fit`])
//! - greedy backward elimination ([`find_best_model`])

pub mod backward;
pub mod criteria;
pub mod exhaustive;

pub use backward::*;
pub use criteria::*;
pub use exhaustive::*;
