//! Candidate regression models.

use serde::Serialize;

use crate::domain::Variable;
use crate::error::Result;
use crate::math::ols;

/// A response variable paired with an ordered list of explanatory variables
/// and a fitness score.
///
/// Ordering of `explanatory` is significant: coefficient vectors and subset
/// enumeration both follow it. The list is mutable so that search code can
/// drop variables to form sub-models.
///
/// `#[derive(Clone)]` gives exactly the clone semantics search needs: the
/// clone owns an independent explanatory list (removing an element from a
/// clone never affects the original) while the variables inside keep sharing
/// their observation storage.
///
/// Dimension agreement between response and explanatory variables is checked
/// lazily at fit time, not at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    response: Variable,
    explanatory: Vec<Variable>,
    fitness: f64,
}

impl Model {
    pub fn new(response: Variable, explanatory: Vec<Variable>) -> Self {
        Self {
            response,
            explanatory,
            fitness: 0.0,
        }
    }

    pub fn response(&self) -> &Variable {
        &self.response
    }

    pub fn explanatory(&self) -> &[Variable] {
        &self.explanatory
    }

    /// Fitness score under whichever criterion last evaluated this model.
    ///
    /// Scores are only meaningful relative to the same criterion; an adjusted
    /// R² of 0.6 and an AIC of 0.6 are not comparable.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Remove (and return) the explanatory variable at `index`.
    pub fn remove_explanatory(&mut self, index: usize) -> Variable {
        self.explanatory.remove(index)
    }

    /// Observation count of the response variable.
    pub fn observation_count(&self) -> usize {
        self.response.len()
    }

    /// One borrowed column per explanatory variable, in model order.
    pub fn columns(&self) -> Vec<&[f64]> {
        self.explanatory.iter().map(|v| v.values()).collect()
    }

    /// OLS coefficient vector for the model as currently composed:
    /// intercept first, then one coefficient per explanatory variable in
    /// model order.
    pub fn coefficients(&self) -> Result<Vec<f64>> {
        ols::beta_estimates(self.response.values(), &self.columns())
    }
}
