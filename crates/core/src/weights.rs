use common::{error::Error, types::edge_key};
use std::collections::HashMap;

/// Edge weights keyed by the concatenation of source and target names.
///
/// Every stored weight has passed `is_valid_rate`; see [`crate::GraphBuilder`].
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    weights: HashMap<String, f64>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of `from -> to`, if present.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.weights.get(&edge_key(from, to)).copied()
    }

    /// Weight of `from -> to`.
    ///
    /// # Errors
    /// Returns `Error::MissingEdge` when the table has no entry. No default weight
    /// is ever substituted.
    pub fn weight(&self, from: &str, to: &str) -> Result<f64, Error> {
        self.get(from, to).ok_or_else(|| Error::MissingEdge {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `(key, weight)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(key, &weight)| (key.as_str(), weight))
    }

    pub(crate) fn insert(&mut self, from: &str, to: &str, weight: f64) {
        self.weights.insert(edge_key(from, to), weight);
    }
}
