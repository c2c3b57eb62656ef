//! Built-in sample graph used by tests, benchmarks and the `sample` data source.

use super::context::{GraphBuilder, GraphContext};
use common::error::Error;

/// The eight-node sample: `(from, to, rate)` in children insertion order.
///
/// ```text
/// 111 -> 222 (1), 444 (2), 888 (3.5), 666 (3), 555 (2)
/// 222 -> 333 (1), 444 (1)
/// 333 -> 444 (1), 777 (1)
/// 444 -> 888 (2)
/// 555 -> 666 (2), 777 (0.1)
/// 666 -> 888 (1.5)
/// 777 -> 888 (4)
/// ```
///
/// There are eight simple paths from `111` to `888`; the best is
/// `111 -> 555 -> 666 -> 888` with a product of 6.0, beating the direct 3.5.
pub const SAMPLE_EDGES: [(&str, &str, f64); 14] = [
    ("111", "222", 1.0),
    ("111", "444", 2.0),
    ("111", "888", 3.5),
    ("111", "666", 3.0),
    ("111", "555", 2.0),
    ("222", "333", 1.0),
    ("222", "444", 1.0),
    ("333", "444", 1.0),
    ("333", "777", 1.0),
    ("444", "888", 2.0),
    ("555", "666", 2.0),
    ("555", "777", 0.1),
    ("666", "888", 1.5),
    ("777", "888", 4.0),
];

pub const SAMPLE_NODES: [&str; 8] = ["111", "222", "333", "444", "555", "666", "777", "888"];

/// Builds the sample graph with nodes registered in `111..888` order.
pub fn sample_context() -> Result<GraphContext, Error> {
    let mut builder = GraphBuilder::new();
    for name in SAMPLE_NODES {
        builder.add_node(name);
    }
    for (from, to, rate) in SAMPLE_EDGES {
        builder.add_edge(from, to, rate)?;
    }
    Ok(builder.build())
}
