use std::path::PathBuf;
use tracing::info;

use super::csv_loader::CsvLoader;
use super::error::Error;
use super::snapshot::SnapshotLoader;
use super::types::{GraphSource, LoadedGraph, SourceKind};
use rate_path_core::fixtures::sample_context;

/// The built-in sample graph.
pub struct SampleSource;

impl GraphSource for SampleSource {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn load(&self) -> Result<LoadedGraph, Error> {
        Ok(LoadedGraph {
            context: sample_context()?,
            ..LoadedGraph::default()
        })
    }
}

/// Picks the loader for `kind`. File-backed sources need `path`.
pub fn open_source(kind: SourceKind, path: Option<PathBuf>) -> Result<Box<dyn GraphSource>, Error> {
    let source: Box<dyn GraphSource> = match kind {
        SourceKind::Sample => Box::new(SampleSource),
        SourceKind::Csv => Box::new(CsvLoader::new(path.ok_or(Error::MissingInputPath("csv"))?)),
        SourceKind::Snapshot => Box::new(SnapshotLoader::new(
            path.ok_or(Error::MissingInputPath("snapshot"))?,
        )),
    };
    Ok(source)
}

/// Opens and loads a source, logging the size of the resulting graph.
pub fn load_graph(kind: SourceKind, path: Option<PathBuf>) -> Result<LoadedGraph, Error> {
    let source = open_source(kind, path)?;
    let loaded = source.load()?;
    info!(
        "Loaded {} nodes and {} edges from {} source.",
        loaded.context.pool().len(),
        loaded.context.num_edges(),
        source.name()
    );
    Ok(loaded)
}
