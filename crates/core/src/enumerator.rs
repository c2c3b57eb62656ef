use super::context::GraphContext;
use super::pool::{Node, NodePool, Path};
use super::selection::{ValuedPath, best_index};
use super::traits::PathStrategy;
use super::valuation::path_values;
use common::error::Error;
use std::collections::HashSet;
use tracing::debug;

/// Optional bounds on an exhaustive search. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    /// Stop once this many paths have been collected.
    pub max_paths: Option<usize>,
    /// Longest path to follow, counted in edges.
    pub max_depth: Option<usize>,
}

/// Depth-first enumeration of every simple path between two nodes.
///
/// The search keeps a set of nodes on the *active branch* only: a node is
/// marked when entered and unmarked when its frame returns, so a node excluded
/// from one branch is available again to its siblings. Reaching the end node
/// records a copy of the current branch and stops descending there, even if
/// the end node has outgoing edges.
///
/// Output order follows the children insertion order of every node, so two
/// runs over the same pool return identical lists.
///
/// The number of simple paths grows exponentially with graph density. This
/// search is meant for small graphs or for callers that need every route, e.g.
/// to re-value the same conversion chains as rates change. Use
/// [`crate::MaxProductSolver`] when only the best path matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPathsEnumerator {
    limits: EnumerationLimits,
}

impl AllPathsEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: EnumerationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> EnumerationLimits {
        self.limits
    }

    /// Collects every simple path from `start` to `end`.
    ///
    /// If `start == end` the result is the single path `[start]`.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if `start`, `end`, or a child name reached
    /// during the search is missing from `pool`.
    pub fn enumerate<'a>(
        &self,
        start: &str,
        end: &str,
        pool: &'a NodePool,
    ) -> Result<Vec<Path<'a>>, Error> {
        let start = pool.lookup(start)?;
        let end = pool.lookup(end)?;

        let mut search = BranchSearch {
            pool,
            end,
            limits: self.limits,
            active: HashSet::new(),
            branch: vec![start],
            found: Vec::new(),
        };
        search.visit(start)?;

        debug!(
            start = start.name(),
            end = end.name(),
            paths = search.found.len(),
            "all-paths enumeration finished"
        );
        Ok(search.found)
    }

    /// Enumerates every path and pairs each one with its value, preserving order.
    pub fn enumerate_valued<'a>(
        &self,
        context: &'a GraphContext,
        start: &str,
        end: &str,
    ) -> Result<Vec<ValuedPath<'a>>, Error> {
        let paths = self.enumerate(start, end, context.pool())?;
        let values = path_values(&paths, context.weights())?;

        Ok(paths
            .into_iter()
            .zip(values)
            .map(|(nodes, value)| ValuedPath { nodes, value })
            .collect())
    }
}

/// Every simple path from `start` to `end`, without limits.
pub fn enumerate_all_paths<'a>(
    start: &str,
    end: &str,
    pool: &'a NodePool,
) -> Result<Vec<Path<'a>>, Error> {
    AllPathsEnumerator::new().enumerate(start, end, pool)
}

/// State of one enumeration run.
struct BranchSearch<'a> {
    pool: &'a NodePool,
    end: &'a Node,
    limits: EnumerationLimits,
    active: HashSet<&'a str>,
    branch: Vec<&'a Node>,
    found: Vec<Path<'a>>,
}

impl<'a> BranchSearch<'a> {
    fn is_full(&self) -> bool {
        self.limits
            .max_paths
            .is_some_and(|max_paths| self.found.len() >= max_paths)
    }

    fn at_depth_limit(&self) -> bool {
        self.limits
            .max_depth
            .is_some_and(|max_depth| self.branch.len() > max_depth)
    }

    /// `node` is the last element of `branch`.
    fn visit(&mut self, node: &'a Node) -> Result<(), Error> {
        if self.is_full() {
            return Ok(());
        }
        if node == self.end {
            self.found.push(self.branch.clone());
            return Ok(());
        }
        if self.at_depth_limit() {
            return Ok(());
        }

        // The mark must be cleared on every return from this frame.
        self.active.insert(node.name());
        let outcome = self.expand(node);
        self.active.remove(node.name());
        outcome
    }

    fn expand(&mut self, node: &'a Node) -> Result<(), Error> {
        let pool = self.pool;
        for child in pool.children(node) {
            let child = child?;
            if self.is_full() {
                break;
            }
            if self.active.contains(child.name()) {
                continue;
            }

            self.branch.push(child);
            let outcome = self.visit(child);
            self.branch.pop();
            outcome?;
        }
        Ok(())
    }
}

impl PathStrategy for AllPathsEnumerator {
    fn name(&self) -> &'static str {
        "all_paths"
    }

    /// Enumerates, values every path, and keeps the first path with the largest value.
    fn best_path<'a>(
        &self,
        context: &'a GraphContext,
        start: &str,
        end: &str,
    ) -> Result<Option<ValuedPath<'a>>, Error> {
        let mut valued = self.enumerate_valued(context, start, end)?;
        let values: Vec<f64> = valued.iter().map(|path| path.value).collect();

        Ok(best_index(&values).map(|idx| valued.swap_remove(idx)))
    }
}
