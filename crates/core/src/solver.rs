use super::context::GraphContext;
use super::pool::{Node, NodePool, Path};
use super::selection::ValuedPath;
use super::traits::PathStrategy;
use super::weights::WeightTable;
use common::{
    error::Error,
    numeric_kernel::{from_log_space, to_log_space},
};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

/// Solver for the maximum-product path using a log-transformed, Dijkstra-shaped relaxation.
///
/// Each rate `w` is replaced by `ln(w)`, so the best product is the best sum
/// of logs. Distances start at `-inf` (0 for the source), and a max-priority
/// queue repeatedly yields the most promising node. There is no settled set:
/// any node whose distance improves is pushed again, which makes this a
/// repeated-relaxation longest-path search rather than single-settle Dijkstra.
///
/// # Limitations
/// Rates below 1.0 give negative log weights. On a graph with a value-growing
/// cycle (a cycle whose rate product exceeds 1.0) distances keep increasing
/// and the search does not terminate. Only run it on graphs free of such
/// cycles: DAGs, or cyclic graphs where every cycle's product is at most 1.0.
pub struct MaxProductSolver;

/// Heap entry ordered by distance, then by reversed name so that ties pop the
/// lexicographically smallest node first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry<'a> {
    distance: f64,
    node: &'a Node,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl MaxProductSolver {
    /// Finds the path from `start` to `end` maximising the product of its rates.
    ///
    /// # Returns
    /// `(value, path)` where `value = exp(best log-sum)`.
    ///
    /// If `end` is unreachable, returns `(0.0, [end])`: the distance of `end`
    /// stays at `-inf` and it has no predecessor. That single-node list is not
    /// a real path; [`PathStrategy::best_path`] turns it into `None`.
    ///
    /// # Errors
    /// Returns `Error::NotFound` for an unknown `start` or `end`, and
    /// `Error::MissingEdge` if an adjacency entry has no weight.
    pub fn solve<'a>(
        &self,
        pool: &'a NodePool,
        start: &str,
        end: &str,
        weights: &WeightTable,
    ) -> Result<(f64, Path<'a>), Error> {
        let start = pool.lookup(start)?;
        let end = pool.lookup(end)?;

        let mut distance: HashMap<&str, f64> = pool
            .iter()
            .map(|node| (node.name(), f64::NEG_INFINITY))
            .collect();
        distance.insert(start.name(), 0.0);

        let mut predecessor: HashMap<&str, &'a Node> = HashMap::with_capacity(pool.len());

        let mut queue = BinaryHeap::with_capacity(pool.len());
        queue.push(QueueEntry {
            distance: 0.0,
            node: start,
        });

        let mut pops = 0usize;
        let mut relaxations = 0usize;

        while let Some(QueueEntry { node: current, .. }) = queue.pop() {
            pops += 1;
            let current_distance = distance[current.name()];

            for child in pool.children(current) {
                let child = child?;
                let rate = weights.weight(current.name(), child.name())?;
                let candidate = current_distance + to_log_space(rate);

                let best = distance.entry(child.name()).or_insert(f64::NEG_INFINITY);
                if candidate > *best {
                    *best = candidate;
                    predecessor.insert(child.name(), current);
                    queue.push(QueueEntry {
                        distance: candidate,
                        node: child,
                    });
                    relaxations += 1;
                }
            }
        }

        debug!(
            start = start.name(),
            end = end.name(),
            pops,
            relaxations,
            "max-product relaxation finished"
        );

        let path = Self::reconstruct_path(end, &predecessor);
        Ok((from_log_space(distance[end.name()]), path))
    }

    /// Follows predecessor links back from `end` and returns the path in forward order.
    ///
    /// Stops at the first node without a predecessor, which is `start` for a
    /// reachable `end` and `end` itself otherwise.
    fn reconstruct_path<'a>(end: &'a Node, predecessor: &HashMap<&str, &'a Node>) -> Path<'a> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(&previous) = predecessor.get(current.name()) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}

/// Maximum-product path from `start` to `end`; see [`MaxProductSolver::solve`].
pub fn max_product_path<'a>(
    pool: &'a NodePool,
    start: &str,
    end: &str,
    weights: &WeightTable,
) -> Result<(f64, Path<'a>), Error> {
    MaxProductSolver.solve(pool, start, end, weights)
}

impl PathStrategy for MaxProductSolver {
    fn name(&self) -> &'static str {
        "max_product"
    }

    fn best_path<'a>(
        &self,
        context: &'a GraphContext,
        start: &str,
        end: &str,
    ) -> Result<Option<ValuedPath<'a>>, Error> {
        let (value, nodes) = self.solve(context.pool(), start, end, context.weights())?;

        // A real path always begins at `start`; the unreachable result is just `[end]`.
        match nodes.first() {
            Some(first) if first.name() == start => Ok(Some(ValuedPath { nodes, value })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod max_product_tests {
    use super::*;
    use crate::GraphBuilder;
    use crate::fixtures::sample_context;
    use common::numeric_kernel::{PRODUCT_TOLERANCE, approx_eq};

    fn names<'a>(path: &[&'a Node]) -> Vec<&'a str> {
        path.iter().map(|node| node.name()).collect()
    }

    #[test]
    fn sample_graph_best_path() {
        let context = sample_context().unwrap();
        let (value, path) =
            max_product_path(context.pool(), "111", "888", context.weights()).unwrap();

        assert!(approx_eq(value, 6.0, PRODUCT_TOLERANCE), "got {}", value);
        assert_eq!(names(&path), vec!["111", "555", "666", "888"]);
    }

    #[test]
    fn start_equal_to_end() {
        let context = sample_context().unwrap();
        let (value, path) =
            max_product_path(context.pool(), "444", "444", context.weights()).unwrap();

        assert_eq!(value, 1.0);
        assert_eq!(names(&path), vec!["444"]);
    }

    #[test]
    fn unreachable_end_returns_degenerate_result() {
        let context = sample_context().unwrap();
        let (value, path) =
            max_product_path(context.pool(), "888", "111", context.weights()).unwrap();

        assert_eq!(value, 0.0);
        assert_eq!(names(&path), vec!["111"]);
    }

    #[test]
    fn isolated_end_returns_degenerate_result() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("USD", "EUR", 0.92).unwrap();
        builder.add_node("XAU");
        let context = builder.build();

        let (value, path) =
            max_product_path(context.pool(), "USD", "XAU", context.weights()).unwrap();
        assert_eq!(value, 0.0);
        assert_eq!(names(&path), vec!["XAU"]);
    }

    #[test]
    fn unknown_names_are_not_found() {
        let context = sample_context().unwrap();
        assert_eq!(
            max_product_path(context.pool(), "111", "000", context.weights()).err(),
            Some(Error::NotFound("000".to_string()))
        );
    }

    #[test]
    fn missing_weight_is_reported() {
        let context = sample_context().unwrap();
        let empty = WeightTable::new();
        assert!(matches!(
            max_product_path(context.pool(), "111", "888", &empty),
            Err(Error::MissingEdge { .. })
        ));
    }

    #[test]
    fn sub_unit_rates_are_handled() {
        // Every rate is below 1.0; the best chain loses the least.
        let context = GraphBuilder::from_edges([
            ("A", "B", 0.9),
            ("B", "D", 0.9),
            ("A", "C", 0.5),
            ("C", "D", 0.99),
            ("A", "D", 0.7),
        ])
        .unwrap();

        let (value, path) =
            max_product_path(context.pool(), "A", "D", context.weights()).unwrap();
        assert!(approx_eq(value, 0.81, PRODUCT_TOLERANCE), "got {}", value);
        assert_eq!(names(&path), vec!["A", "B", "D"]);
    }

    #[test]
    fn later_improvement_re_relaxes_node() {
        // C is first reached directly (1.0), then improved through B (2 * 2 = 4);
        // the improvement must propagate to D.
        let context = GraphBuilder::from_edges([
            ("A", "C", 1.0),
            ("A", "B", 2.0),
            ("B", "C", 2.0),
            ("C", "D", 1.5),
        ])
        .unwrap();

        let (value, path) =
            max_product_path(context.pool(), "A", "D", context.weights()).unwrap();
        assert!(approx_eq(value, 6.0, PRODUCT_TOLERANCE), "got {}", value);
        assert_eq!(names(&path), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn value_losing_cycles_terminate() {
        // USD -> EUR -> USD loses value (0.9 * 1.1 = 0.99), so the search ends.
        let context = GraphBuilder::from_edges([
            ("USD", "EUR", 0.9),
            ("EUR", "USD", 1.1),
            ("EUR", "GBP", 0.85),
            ("USD", "GBP", 0.7),
        ])
        .unwrap();

        let (value, path) =
            max_product_path(context.pool(), "USD", "GBP", context.weights()).unwrap();
        assert!(approx_eq(value, 0.765, PRODUCT_TOLERANCE), "got {}", value);
        assert_eq!(names(&path), vec!["USD", "EUR", "GBP"]);
    }

    #[test]
    fn queue_pops_highest_distance_then_smallest_name() {
        let a = Node::new("A");
        let b = Node::new("B");
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry { distance: 1.0, node: &b });
        queue.push(QueueEntry { distance: 1.0, node: &a });
        queue.push(QueueEntry { distance: 2.0, node: &b });

        let order: Vec<(f64, &str)> = std::iter::from_fn(|| queue.pop())
            .map(|entry| (entry.distance, entry.node.name()))
            .collect();
        assert_eq!(order, vec![(2.0, "B"), (1.0, "A"), (1.0, "B")]);
    }

    #[test]
    fn strategy_maps_unreachable_to_none() {
        let context = sample_context().unwrap();
        let solver = MaxProductSolver;

        assert!(solver.best_path(&context, "888", "111").unwrap().is_none());

        let best = solver.best_path(&context, "111", "888").unwrap().unwrap();
        assert_eq!(best.names(), vec!["111", "555", "666", "888"]);

        let same = solver.best_path(&context, "222", "222").unwrap().unwrap();
        assert_eq!(same.names(), vec!["222"]);
        assert_eq!(same.value, 1.0);
    }
}
