//! Fitness criteria for ranking candidate models.
//!
//! A criterion bundles its score function and its comparator so the two can
//! never drift apart: adjusted R² scores are only ever compared
//! higher-is-better, AIC scores only lower-is-better.

use serde::{Deserialize, Serialize};

use crate::domain::Model;
use crate::error::Result;
use crate::math::ols;

/// Pluggable fitness criterion driving both search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Coefficient of determination penalized for predictor count.
    /// Higher is better.
    AdjustedR2,
    /// Akaike information criterion. Lower is better.
    Aic,
}

impl Criterion {
    /// Human-readable label for reporting.
    pub fn display_name(self) -> &'static str {
        match self {
            Criterion::AdjustedR2 => "Adjusted R²",
            Criterion::Aic => "AIC",
        }
    }

    /// Score `model` under this criterion.
    pub fn evaluate(self, model: &Model) -> Result<f64> {
        let y = model.response().values();
        let columns = model.columns();
        match self {
            Criterion::AdjustedR2 => ols::adjusted_r2(y, &columns),
            Criterion::Aic => ols::aic(y, &columns),
        }
    }

    /// Whether `candidate` beats `current` under this criterion.
    ///
    /// Strict: a tie is never an improvement, so iterative search cannot
    /// oscillate between equally-scored models.
    pub fn is_better(self, current: f64, candidate: f64) -> bool {
        match self {
            Criterion::AdjustedR2 => candidate > current,
            Criterion::Aic => candidate < current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Variable;

    fn scenario_model() -> Model {
        let y = Variable::new("y", vec![1.0, 2.2, 3.1, 2.5]);
        let x1 = Variable::new("x1", vec![177.0, 175.0, 183.0, 167.0]);
        let x2 = Variable::new("x2", vec![3.0, 5.0, 6.0, 9.0]);
        Model::new(y, vec![x1, x2])
    }

    #[test]
    fn aic_evaluation_matches_formula() {
        let value = Criterion::Aic.evaluate(&scenario_model()).unwrap();
        assert!((value - (-4.032542)).abs() < 1e-5);
    }

    #[test]
    fn adjusted_r2_prefers_higher() {
        let c = Criterion::AdjustedR2;
        assert!(c.is_better(0.4, 0.6));
        assert!(!c.is_better(0.6, 0.4));
    }

    #[test]
    fn aic_prefers_lower() {
        let c = Criterion::Aic;
        assert!(c.is_better(10.0, 4.0));
        assert!(!c.is_better(4.0, 10.0));
    }

    #[test]
    fn display_names_label_each_criterion() {
        assert_eq!(Criterion::AdjustedR2.display_name(), "Adjusted R²");
        assert_eq!(Criterion::Aic.display_name(), "AIC");
    }

    #[test]
    fn ties_are_never_better() {
        assert!(!Criterion::AdjustedR2.is_better(0.5, 0.5));
        assert!(!Criterion::Aic.is_better(0.5, 0.5));
    }
}
