//! Ordinary least squares fitting.
//!
//! Coefficients are estimated through the normal equations:
//!
//! ```text
//! β = (XᵀX)⁻¹ Xᵀ y
//! ```
//!
//! where `X` is the design matrix with an all-ones intercept column. The
//! parameter dimension during subset search is tiny (a handful of columns),
//! so explicitly inverting `XᵀX` is both cheap and makes singularity
//! detection direct: `try_inverse` failing *is* the non-fittable case
//! (collinear columns, or fewer observations than parameters).
//!
//! All functions are pure; no argument is mutated.

use nalgebra::DVector;

use crate::error::{FitError, Result};
use crate::math::matrix::design_matrix;
use crate::math::stats;

/// Floor applied to `RSS / n` before taking the log in information criteria,
/// so that a perfect fit yields a large negative score instead of −∞.
const MIN_MEAN_RSS: f64 = 1e-12;

/// OLS coefficient estimates for `y` regressed on `columns`.
///
/// Returns the intercept first, then one coefficient per column in input
/// order. Fails with `DimensionMismatch` when column lengths disagree with
/// `y`, and with `NonFittableModel` when the normal equations are singular.
pub fn beta_estimates(y: &[f64], columns: &[&[f64]]) -> Result<Vec<f64>> {
    let n = y.len();
    if n == 0 {
        return Err(FitError::non_fittable("no observations"));
    }

    let x = design_matrix(n, columns)?;
    let xt = x.transpose();
    let xtx = &xt * &x;
    let inverse = xtx.try_inverse().ok_or_else(|| {
        FitError::non_fittable(
            "normal equations are singular (collinear columns, or too few observations)",
        )
    })?;

    let y_vec = DVector::from_column_slice(y);
    let beta = inverse * xt * y_vec;
    Ok(beta.iter().copied().collect())
}

/// Fitted values `ŷ_i = β₀ + Σ_j β_j · x_{j,i}` using [`beta_estimates`].
pub fn fitted_values(y: &[f64], columns: &[&[f64]]) -> Result<Vec<f64>> {
    let beta = beta_estimates(y, columns)?;

    let fitted = (0..y.len())
        .map(|i| {
            let mut y_fit = beta[0];
            for (j, col) in columns.iter().enumerate() {
                y_fit += beta[j + 1] * col[i];
            }
            y_fit
        })
        .collect();
    Ok(fitted)
}

/// Residual sum of squares `Σ (y_i − ŷ_i)²`.
pub fn sum_of_squared_residuals(y: &[f64], columns: &[&[f64]]) -> Result<f64> {
    let fitted = fitted_values(y, columns)?;
    Ok(y.iter()
        .zip(fitted.iter())
        .map(|(&a, &f)| (a - f) * (a - f))
        .sum())
}

/// Adjusted coefficient of determination:
///
/// ```text
/// 1 − ((1 − R²)(n − 1)) / (n − k − 1)
/// ```
///
/// Fails with `NonFittableModel` when `n − k − 1 ≤ 0`; the degenerate
/// denominator is rejected explicitly rather than left to produce a
/// spurious infinite score.
pub fn adjusted_r2(y: &[f64], columns: &[&[f64]]) -> Result<f64> {
    let n = y.len();
    let k = columns.len();
    if n <= k + 1 {
        return Err(FitError::non_fittable(format!(
            "no degrees of freedom for adjusted R²: n={n}, k={k}"
        )));
    }

    let fitted = fitted_values(y, columns)?;
    let r2 = stats::r_squared(y, &fitted)?;
    Ok(1.0 - ((1.0 - r2) * (n - 1) as f64) / (n - k - 1) as f64)
}

/// Akaike information criterion: `2(k + 2) + n·ln(RSS/n)`.
///
/// Lower is better. `RSS/n` is floored at a tiny constant so perfect fits
/// stay finite.
pub fn aic(y: &[f64], columns: &[&[f64]]) -> Result<f64> {
    let n = y.len();
    for col in columns {
        if col.len() != n {
            return Err(FitError::DimensionMismatch {
                expected: n,
                found: col.len(),
            });
        }
    }

    let rss = sum_of_squared_residuals(y, columns)?;
    let mean_rss = (rss / n as f64).max(MIN_MEAN_RSS);
    Ok(2.0 * (columns.len() as f64 + 2.0) + n as f64 * mean_rss.ln())
}

/// Single-predictor slope estimate `cov(x, y) / var(x)`.
pub fn beta_estimate(y: &[f64], x: &[f64]) -> Result<f64> {
    let cov = stats::covariance(x, y)?;
    let var = stats::variance(x)?;
    if var == 0.0 {
        return Err(FitError::non_fittable("explanatory variable has zero variance"));
    }
    Ok(cov / var)
}

/// Single-predictor intercept estimate `ȳ − β·x̄`.
pub fn alpha_estimate(y: &[f64], x: &[f64]) -> Result<f64> {
    Ok(stats::mean(y)? - beta_estimate(y, x)? * stats::mean(x)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_estimates_recover_exact_line() {
        // y = 2 + 3x on x = [0, 1, 2].
        let y = [2.0, 5.0, 8.0];
        let x = [0.0, 1.0, 2.0];
        let beta = beta_estimates(&y, &[&x]).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn beta_estimates_reject_collinear_columns() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let x1 = [1.0, 1.0, 1.0, 1.0];
        let err = beta_estimates(&y, &[&x1]).unwrap_err();
        assert!(matches!(err, crate::error::FitError::NonFittableModel { .. }));
    }

    #[test]
    fn beta_estimates_reject_ragged_columns() {
        let y = [1.0, 2.0, 3.0];
        let x1 = [1.0, 2.0];
        let err = beta_estimates(&y, &[&x1]).unwrap_err();
        assert!(matches!(err, crate::error::FitError::DimensionMismatch { .. }));
    }

    #[test]
    fn rss_matches_reference_scenario() {
        // Verified against R: lm(y ~ x1 + x2).
        let y = [1.0, 2.2, 3.1, 2.5];
        let x1 = [177.0, 175.0, 183.0, 167.0];
        let x2 = [3.0, 5.0, 6.0, 9.0];
        let rss = sum_of_squared_residuals(&y, &[&x1, &x2]).unwrap();
        assert!((rss - 0.19753).abs() < 1e-5, "rss = {rss}");
    }

    #[test]
    fn aic_matches_reference_scenario() {
        let y = [1.0, 2.2, 3.1, 2.5];
        let x1 = [177.0, 175.0, 183.0, 167.0];
        let x2 = [3.0, 5.0, 6.0, 9.0];
        let value = aic(&y, &[&x1, &x2]).unwrap();
        assert!((value - (-4.032542)).abs() < 1e-5, "aic = {value}");
    }

    #[test]
    fn adjusted_r2_rejects_zero_degrees_of_freedom() {
        // n = 3, k = 2 leaves n − k − 1 = 0.
        let y = [1.0, 2.0, 3.0];
        let x1 = [1.0, 2.0, 4.0];
        let x2 = [2.0, 1.0, 5.0];
        let err = adjusted_r2(&y, &[&x1, &x2]).unwrap_err();
        assert!(matches!(err, crate::error::FitError::NonFittableModel { .. }));
    }

    #[test]
    fn fitted_values_minimize_rss() {
        // OLS optimality: perturbing the coefficient vector can only raise
        // the residual sum of squares.
        let y = [2.2, 3.5, 3.0, 14.0, 8.0, 2.0];
        let x1 = [1.0, 2.0, 3.0, 4.0, 5.0, 2.2];
        let x2 = [1.0, 1.1, 1.4, 1.3, 1.5, 1.2];
        let columns: [&[f64]; 2] = [&x1, &x2];

        let beta = beta_estimates(&y, &columns).unwrap();
        let best_rss = sum_of_squared_residuals(&y, &columns).unwrap();

        let deltas = [0.01, -0.02, 0.5, -1.0];
        for (i, &d) in deltas.iter().enumerate() {
            let mut perturbed = beta.clone();
            let slot = i % perturbed.len();
            perturbed[slot] += d;

            let rss: f64 = y
                .iter()
                .enumerate()
                .map(|(obs, &yi)| {
                    let fit = perturbed[0]
                        + perturbed[1] * columns[0][obs]
                        + perturbed[2] * columns[1][obs];
                    (yi - fit) * (yi - fit)
                })
                .sum();
            assert!(best_rss <= rss + 1e-6, "perturbation {i} beat OLS");
        }
    }

    #[test]
    fn simple_regression_estimates_match_full_fit() {
        let y = [2.0, 5.0, 8.0, 11.0];
        let x = [0.0, 1.0, 2.0, 3.0];
        assert!((beta_estimate(&y, &x).unwrap() - 3.0).abs() < 1e-12);
        assert!((alpha_estimate(&y, &x).unwrap() - 2.0).abs() < 1e-12);
    }
}
