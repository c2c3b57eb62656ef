use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::error::Error;
use super::types::{GraphSource, LoadedGraph};
use rate_path_core::GraphBuilder;

/// Saved response of a live-quotes endpoint.
///
/// ```json
/// {
///   "success": true,
///   "source": "USD",
///   "quotes": { "USDEUR": 0.92, "USDGBP": 0.78 },
///   "currencies": { "USD": "United States Dollar", "EUR": "Euro" }
/// }
/// ```
///
/// `currencies` is optional. Several per-source responses can be merged into
/// one file by listing all their quotes under a single `quotes` object.
#[derive(Debug, Deserialize, Clone)]
pub struct QuoteSnapshot {
    #[serde(default = "default_success")]
    pub success: bool,
    pub source: Option<String>,
    #[serde(default)]
    pub quotes: BTreeMap<String, f64>,
    pub currencies: Option<BTreeMap<String, String>>,
    pub error: Option<serde_json::Value>,
}

fn default_success() -> bool {
    true
}

/// Splits a concatenated quote key such as `USDEUR` into its two codes.
///
/// Both codes must have the same length, which holds for ISO-4217 codes.
pub fn split_quote_key(key: &str) -> Option<(&str, &str)> {
    if key.is_empty() || key.len() % 2 != 0 || !key.is_char_boundary(key.len() / 2) {
        return None;
    }
    Some(key.split_at(key.len() / 2))
}

impl QuoteSnapshot {
    pub fn from_json(content: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds the graph: nodes first, then one edge per quote in key order.
    ///
    /// With a `currencies` list, every listed currency is a node (even without
    /// quotes), and quotes naming an unlisted currency or carrying a key that
    /// does not split are skipped. Without it, nodes come from the quotes
    /// themselves and a malformed key is an error.
    pub fn into_graph(self) -> Result<LoadedGraph, Error> {
        if !self.success {
            let reason = self
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no error details".to_string());
            return Err(Error::SnapshotRejected(reason));
        }

        let mut builder = GraphBuilder::new();
        let currencies = self.currencies.unwrap_or_default();
        for code in currencies.keys() {
            builder.add_node(code);
        }

        let mut skipped = 0usize;
        for (key, rate) in &self.quotes {
            let (from, to) = match split_quote_key(key) {
                Some(codes) => codes,
                None if !currencies.is_empty() => {
                    debug!("Skipping malformed quote key {}.", key);
                    skipped += 1;
                    continue;
                }
                None => return Err(Error::MalformedQuoteKey(key.clone())),
            };

            if from == to {
                debug!("Skipping self-quote {}.", key);
                continue;
            }
            if !currencies.is_empty()
                && !(currencies.contains_key(from) && currencies.contains_key(to))
            {
                skipped += 1;
                continue;
            }
            builder.add_edge(from, to, *rate)?;
        }

        if skipped > 0 {
            warn!("Skipped {} quotes outside the currency list.", skipped);
        }

        Ok(LoadedGraph {
            context: builder.build(),
            currencies,
        })
    }
}

/// Loads a [`QuoteSnapshot`] from a JSON file.
pub struct SnapshotLoader {
    path: PathBuf,
}

impl SnapshotLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotLoader { path: path.into() }
    }
}

impl GraphSource for SnapshotLoader {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn load(&self) -> Result<LoadedGraph, Error> {
        let content = fs::read_to_string(&self.path)?;
        let snapshot = QuoteSnapshot::from_json(&content)?;
        if let Some(source) = &snapshot.source {
            debug!("Snapshot quoted against {}.", source);
        }
        snapshot.into_graph()
    }
}
