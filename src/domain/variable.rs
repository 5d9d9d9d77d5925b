//! Named observation vectors.

use std::sync::Arc;

use serde::Serialize;

/// An immutable named numeric observation vector.
///
/// Values are stored behind an [`Arc`] so that the many ephemeral models
/// created during subset search share the same observation storage. Cloning a
/// `Variable` never copies the data.
///
/// Observation data is not serialized (only the name travels in exports),
/// mirroring how fitted models are reported: by variable name, not by raw
/// data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    name: String,
    #[serde(skip)]
    values: Arc<[f64]>,
}

impl Variable {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observation count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether two variables share the same underlying observation storage.
    pub fn shares_values(&self, other: &Variable) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_observation_storage() {
        let v = Variable::new("x1", vec![1.0, 2.0, 3.0]);
        let c = v.clone();
        assert!(v.shares_values(&c));
        assert_eq!(c.name(), "x1");
        assert_eq!(c.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn len_is_observation_count() {
        let v = Variable::new("y", vec![2.2, 3.5, 3.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert!(Variable::new("empty", vec![]).is_empty());
    }
}
