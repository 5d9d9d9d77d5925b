//! Summary statistics used by the regression layer.
//!
//! Sample (n−1 denominator) variance and covariance throughout, so the
//! single-predictor slope `cov(x, y) / var(x)` agrees with the OLS estimate.

use crate::error::{FitError, Result};

/// Arithmetic mean. Fails when the slice is empty.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(FitError::non_fittable("cannot take the mean of no observations"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance: `Σ(x_i − x̄)² / (n − 1)`.
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(FitError::non_fittable(
            "variance requires at least two observations",
        ));
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok(ss / (values.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn std_deviation(values: &[f64]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}

/// Sample covariance: `Σ(x_i − x̄)(y_i − ȳ) / (n − 1)`.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(FitError::DimensionMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(FitError::non_fittable(
            "covariance requires at least two observations",
        ));
    }

    let x_mean = mean(x)?;
    let y_mean = mean(y)?;
    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
        .sum();
    Ok(sum / (x.len() - 1) as f64)
}

/// Coefficient of determination `R² = 1 − SSres/SStot` from actual and
/// fitted values.
///
/// Fails with `NonFittableModel` when the actual values have zero variance
/// (SStot = 0), rather than dividing through to NaN.
pub fn r_squared(actual: &[f64], fitted: &[f64]) -> Result<f64> {
    if actual.len() != fitted.len() {
        return Err(FitError::DimensionMismatch {
            expected: actual.len(),
            found: fitted.len(),
        });
    }

    let actual_mean = mean(actual)?;
    let ss_tot: f64 = actual
        .iter()
        .map(|&a| (a - actual_mean) * (a - actual_mean))
        .sum();
    if ss_tot == 0.0 {
        return Err(FitError::non_fittable("response variable has zero variance"));
    }

    let ss_res: f64 = actual
        .iter()
        .zip(fitted.iter())
        .map(|(&a, &f)| (a - f) * (a - f))
        .sum();
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance_known_values() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values).unwrap() - 5.0).abs() < 1e-12);
        // Sample variance of the set above is 32/7.
        assert!((variance(&values).unwrap() - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn std_deviation_matches_variance_root() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let sd = std_deviation(&values).unwrap();
        assert!((sd * sd - variance(&values).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn covariance_of_identical_series_is_variance() {
        let x = [1.0, 3.0, 5.0, 7.0];
        let cov = covariance(&x, &x).unwrap();
        assert!((cov - variance(&x).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn covariance_rejects_different_lengths() {
        let err = covariance(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, FitError::DimensionMismatch { .. }));
    }

    #[test]
    fn r_squared_perfect_fit_is_one() {
        let actual = [1.0, 2.0, 3.0];
        assert!((r_squared(&actual, &actual).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn r_squared_rejects_constant_actuals() {
        let err = r_squared(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, FitError::NonFittableModel { .. }));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(mean(&[]).is_err());
        assert!(variance(&[1.0]).is_err());
    }
}
