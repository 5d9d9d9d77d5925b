//! Mathematical utilities: matrix construction, summary statistics, and
//! ordinary least squares.

pub mod matrix;
pub mod ols;
pub mod stats;

pub use matrix::*;
pub use ols::*;
pub use stats::*;
