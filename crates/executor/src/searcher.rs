use tracing::{info, warn};

use super::error::Error;
use common::types::PathSummary;
use rate_path_core::{AllPathsEnumerator, GraphContext, best_index, traits::PathStrategy};

/// Outcome of one `from -> to` query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub strategy: &'static str,
    pub from: String,
    pub to: String,
    /// `None` when `to` cannot be reached from `from`.
    pub best: Option<PathSummary>,
}

pub struct RouteSearcher<S> {
    strategy: S,
}

impl<S> RouteSearcher<S>
where
    S: PathStrategy,
{
    pub fn new(strategy: S) -> Self {
        RouteSearcher { strategy }
    }

    /// Runs the strategy for a single query.
    pub fn search(
        &self,
        context: &GraphContext,
        from: &str,
        to: &str,
    ) -> Result<SearchReport, Error> {
        self.announce(context, from, to);

        let best = self
            .strategy
            .best_path(context, from, to)?
            .map(|path| path.to_summary());

        Ok(self.report(from, to, best))
    }

    /// Runs one query per target. A failed query is logged and reported in
    /// place; the remaining targets are still searched.
    pub fn search_many(
        &self,
        context: &GraphContext,
        from: &str,
        targets: &[String],
    ) -> Vec<Result<SearchReport, Error>> {
        each_target(from, targets, |to| self.search(context, from, to))
    }

    fn announce(&self, context: &GraphContext, from: &str, to: &str) {
        info!(
            "Searcher: {} search {} -> {} on {} nodes.",
            self.strategy.name(),
            from,
            to,
            context.pool().len()
        );
    }

    fn report(&self, from: &str, to: &str, best: Option<PathSummary>) -> SearchReport {
        match &best {
            Some(path) => info!(
                "Best route FOUND: {} (product {}).",
                path.display_route(),
                path.value
            ),
            None => warn!("No route from {} to {}.", from, to),
        }

        SearchReport {
            strategy: self.strategy.name(),
            from: from.to_string(),
            to: to.to_string(),
            best,
        }
    }
}

impl RouteSearcher<AllPathsEnumerator> {
    /// Like [`RouteSearcher::search`], but also returns every simple path with
    /// its value, in enumeration order. Paths are enumerated once and the best
    /// one is picked from that same list.
    pub fn search_listing(
        &self,
        context: &GraphContext,
        from: &str,
        to: &str,
    ) -> Result<(SearchReport, Vec<PathSummary>), Error> {
        self.announce(context, from, to);

        let routes: Vec<PathSummary> = self
            .strategy
            .enumerate_valued(context, from, to)?
            .iter()
            .map(|path| path.to_summary())
            .collect();
        let values: Vec<f64> = routes.iter().map(|route| route.value).collect();
        let best = best_index(&values).map(|idx| routes[idx].clone());

        Ok((self.report(from, to, best), routes))
    }

    /// [`RouteSearcher::search_listing`] for every target, continuing past failures.
    pub fn search_many_listing(
        &self,
        context: &GraphContext,
        from: &str,
        targets: &[String],
    ) -> Vec<Result<(SearchReport, Vec<PathSummary>), Error>> {
        each_target(from, targets, |to| self.search_listing(context, from, to))
    }
}

fn each_target<T>(
    from: &str,
    targets: &[String],
    mut query: impl FnMut(&str) -> Result<T, Error>,
) -> Vec<Result<T, Error>> {
    targets
        .iter()
        .map(|to| {
            query(to).inspect_err(|e| {
                warn!(
                    "Searcher Error: query {} -> {} failed due to: {}. Continuing.",
                    from, to, e
                );
            })
        })
        .collect()
}
