use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing::{error, warn};

use super::error::Error;
use super::types::{GraphSource, LoadedGraph};
use rate_path_core::{GraphBuilder, GraphContext};

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QuoteRecord {
    #[serde(rename = "from")]
    pub from_node: String,

    #[serde(rename = "to")]
    pub to_node: String,

    #[serde(rename = "rate")]
    pub rate_value: f64,
}

/// Loads a graph from a CSV file with `from,to,rate` columns; extra columns are ignored.
///
/// Nodes are registered in first-seen order and edges in file order, so the
/// file order decides the order in which searches explore neighbours.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvLoader { path: path.into() }
    }

    fn parse_records(&self) -> Result<Vec<QuoteRecord>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!("Failed to read file {}: {:?}", self.path.display(), e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: QuoteRecord = result?;
            records.push(record);
        }
        Ok(records)
    }
}

/// Feeds records into a builder. Self-quotes (`USD,USD`) carry no conversion and are skipped.
pub fn build_from_records(records: &[QuoteRecord]) -> Result<GraphContext, Error> {
    let mut builder = GraphBuilder::new();
    for record in records {
        if record.from_node == record.to_node {
            warn!("Skipping self-quote for {}.", record.from_node);
            continue;
        }
        builder.add_edge(&record.from_node, &record.to_node, record.rate_value)?;
    }
    Ok(builder.build())
}

impl GraphSource for CsvLoader {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn load(&self) -> Result<LoadedGraph, Error> {
        let records = self.parse_records()?;
        Ok(LoadedGraph {
            context: build_from_records(&records)?,
            ..LoadedGraph::default()
        })
    }
}
