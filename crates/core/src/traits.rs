use super::context::GraphContext;
use super::selection::ValuedPath;
use common::error::Error;

/// Trait for searches that pick the single most valuable path between two nodes.
pub trait PathStrategy {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Finds the path from `start` to `end` with the largest weight product.
    ///
    /// Returns `Ok(Some(path))` on success, `Ok(None)` if `end` cannot be
    /// reached from `start`, or `Err(e)` if a name is unknown or the graph is
    /// inconsistent.
    fn best_path<'a>(
        &self,
        context: &'a GraphContext,
        start: &str,
        end: &str,
    ) -> Result<Option<ValuedPath<'a>>, Error>;
}
