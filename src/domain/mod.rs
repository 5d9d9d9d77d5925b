//! Domain types used throughout the search engine.
//!
//! This module defines:
//!
//! - immutable named observation vectors ([`Variable`])
//! - candidate regression models ([`Model`])

pub mod model;
pub mod variable;

pub use model::*;
pub use variable::*;
