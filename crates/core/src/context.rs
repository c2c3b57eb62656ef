use super::pool::{Node, NodePool};
use super::weights::WeightTable;
use common::{error::Error, numeric_kernel::is_valid_rate};
use tracing::debug;

/// Read-only snapshot of a graph: the node pool plus its weight table.
///
/// Built once by a [`GraphBuilder`] and passed by reference to every search.
/// Both invariants hold for any context produced by the builder:
/// - every child name resolves in the pool;
/// - every edge in an adjacency list has a finite, strictly positive weight.
#[derive(Debug, Clone, Default)]
pub struct GraphContext {
    pool: NodePool,
    weights: WeightTable,
}

impl GraphContext {
    pub fn pool(&self) -> &NodePool {
        &self.pool
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn lookup(&self, name: &str) -> Result<&Node, Error> {
        self.pool.lookup(name)
    }

    pub fn num_edges(&self) -> usize {
        self.weights.len()
    }
}

/// Incrementally assembles a [`GraphContext`], validating weights on the way in.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    pool: NodePool,
    weights: WeightTable,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from `(from, to, weight)` triples, in order.
    pub fn from_edges<'e, I>(edges: I) -> Result<GraphContext, Error>
    where
        I: IntoIterator<Item = (&'e str, &'e str, f64)>,
    {
        let mut builder = Self::new();
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Adds a node with no edges. Adding an existing name is a no-op.
    pub fn add_node(&mut self, name: &str) -> &mut Self {
        self.pool.insert(name);
        self
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.pool.contains(name)
    }

    /// Adds the directed edge `from -> to`, creating missing endpoints.
    ///
    /// The target is appended to `from`'s children the first time the edge is
    /// seen; re-adding an edge only replaces its weight.
    ///
    /// # Errors
    /// Returns `Error::DomainError` if `weight` is zero, negative or not finite.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<&mut Self, Error> {
        if !is_valid_rate(weight) {
            return Err(Error::DomainError {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        let src = self.pool.insert(from);
        self.pool.insert(to);
        self.pool.node_mut(src).push_child(to);
        self.weights.insert(from, to, weight);
        Ok(self)
    }

    pub fn build(self) -> GraphContext {
        debug!(
            nodes = self.pool.len(),
            edges = self.weights.len(),
            "graph context built"
        );
        GraphContext {
            pool: self.pool,
            weights: self.weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_endpoints_and_weights() {
        let context =
            GraphBuilder::from_edges([("USD", "EUR", 0.92), ("EUR", "GBP", 0.86)]).unwrap();

        assert_eq!(context.pool().len(), 3);
        assert_eq!(context.num_edges(), 2);
        assert_eq!(context.weights().weight("EUR", "GBP"), Ok(0.86));
        assert_eq!(context.lookup("USD").unwrap().children(), ["EUR".to_string()]);
    }

    #[test]
    fn builder_rejects_non_positive_weights() {
        let mut builder = GraphBuilder::new();

        for weight in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let result = builder.add_edge("USD", "EUR", weight);
            assert!(
                matches!(result, Err(Error::DomainError { .. })),
                "weight {} should be rejected",
                weight
            );
        }

        // A rejected edge leaves no trace.
        let context = builder.build();
        assert!(context.pool().is_empty());
        assert_eq!(context.num_edges(), 0);
    }

    #[test]
    fn re_adding_an_edge_replaces_weight_only() {
        let context = GraphBuilder::from_edges([
            ("USD", "EUR", 0.92),
            ("USD", "JPY", 150.0),
            ("USD", "EUR", 0.95),
        ])
        .unwrap();

        let usd = context.lookup("USD").unwrap();
        assert_eq!(usd.children(), ["EUR".to_string(), "JPY".to_string()]);
        assert_eq!(context.weights().weight("USD", "EUR"), Ok(0.95));
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let mut builder = GraphBuilder::new();
        builder.add_node("XAU").add_node("XAU");
        assert!(builder.contains_node("XAU"));

        let context = builder.build();
        assert_eq!(context.pool().len(), 1);
        assert!(context.lookup("XAU").unwrap().children().is_empty());
    }
}
