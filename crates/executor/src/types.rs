use clap::ValueEnum;
use rate_path_core::GraphContext;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::Error;

/// A trait defining the contract for any source that produces the graph the
/// searches run over.
///
/// Implementations own validation: every weight goes through
/// `GraphBuilder::add_edge`, so a non-positive rate stops loading with a
/// `DomainError` instead of reaching the solver.
pub trait GraphSource {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn load(&self) -> Result<LoadedGraph, Error>;
}

/// A graph plus the optional currency descriptions that came with it.
#[derive(Debug, Clone, Default)]
pub struct LoadedGraph {
    pub context: GraphContext,
    pub currencies: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SourceKind {
    /// Built-in eight-node sample graph.
    Sample,
    /// CSV file with `from,to,rate` columns.
    Csv,
    /// JSON quote snapshot (`{"quotes": {"USDEUR": 0.92, ...}}`).
    Snapshot,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Algorithm {
    /// Log-transformed relaxation returning one optimal path.
    MaxProduct,
    /// Exhaustive enumeration of every simple path.
    AllPaths,
}
