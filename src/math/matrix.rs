//! Matrix construction from column vectors.
//!
//! Fitting code works with variables stored column-major (one slice per
//! explanatory variable). The solver wants observation-major rows and a
//! design matrix with an intercept column, so both conversions live here.
//!
//! Shape errors (`DimensionMismatch`) are kept separate from solver errors
//! (`NonFittableModel`): a ragged input is a caller bug, a singular design is
//! a property of the data.

use nalgebra::DMatrix;

use crate::error::{FitError, Result};

/// Transpose column-major variable data into observation rows.
///
/// Each input slice holds all observations for one variable; the output holds
/// one row of `k` values per observation. Fails with `DimensionMismatch` if
/// any column's length differs from the first column's length.
pub fn invert_variable_list(columns: &[&[f64]]) -> Result<Vec<Vec<f64>>> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let n = first.len();

    for col in columns {
        if col.len() != n {
            return Err(FitError::DimensionMismatch {
                expected: n,
                found: col.len(),
            });
        }
    }

    let rows = (0..n)
        .map(|i| columns.iter().map(|col| col[i]).collect())
        .collect();
    Ok(rows)
}

/// Build the `n × (k+1)` design matrix: an all-ones intercept column followed
/// by one column per explanatory variable.
///
/// `n` is the response observation count; fails with `DimensionMismatch` when
/// the column lengths disagree with it.
pub fn design_matrix(n: usize, columns: &[&[f64]]) -> Result<DMatrix<f64>> {
    let rows = invert_variable_list(columns)?;
    if !columns.is_empty() && rows.len() != n {
        return Err(FitError::DimensionMismatch {
            expected: n,
            found: rows.len(),
        });
    }

    Ok(DMatrix::from_fn(n, columns.len() + 1, |i, j| {
        if j == 0 { 1.0 } else { rows[i][j - 1] }
    }))
}
