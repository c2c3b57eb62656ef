// ----------------------------
// Layered benchmark graphs
// ----------------------------

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rate_path_core::{Error, GraphBuilder, GraphContext};

pub const NUM_LAYERS: usize = 7;
pub const LAYER_WIDTH: usize = 6;
pub const SEED: u64 = 0x5eed;

/// Maximum deviation of a generated rate from 1.0 (±2%).
pub const RATE_SPREAD: f64 = 0.02;

pub fn node_name(layer: usize, slot: usize) -> String {
    format!("L{}N{}", layer, slot)
}

/// Name of the single source node in front of layer 0.
pub const SOURCE: &str = "SRC";

/// Name of the single sink node behind the last layer.
pub const SINK: &str = "SNK";

/// Generates a layered DAG: `SRC` fans out to layer 0, every node of layer
/// `k` links to every node of layer `k + 1`, and the last layer drains into `SNK`.
///
/// The graph has `LAYER_WIDTH ^ NUM_LAYERS` simple paths from `SRC` to `SNK`,
/// which makes the exponential cost of exhaustive enumeration visible next to
/// the relaxation solver. Rates are drawn around 1.0 from a seeded RNG, so every
/// run benchmarks the same graph.
pub fn generate_layered_graph(
    layers: usize,
    width: usize,
    seed: u64,
) -> Result<GraphContext, Error> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let rate_range = (1.0 - RATE_SPREAD)..=(1.0 + RATE_SPREAD);
    let mut builder = GraphBuilder::new();

    let add = |builder: &mut GraphBuilder, from: &str, to: &str, rng: &mut SmallRng| {
        let rate = rng.random_range(rate_range.clone());
        builder.add_edge(from, to, rate).map(|_| ())
    };

    for slot in 0..width {
        add(&mut builder, SOURCE, &node_name(0, slot), &mut rng)?;
    }
    for layer in 0..layers.saturating_sub(1) {
        for from in 0..width {
            for to in 0..width {
                add(
                    &mut builder,
                    &node_name(layer, from),
                    &node_name(layer + 1, to),
                    &mut rng,
                )?;
            }
        }
    }
    if layers > 0 {
        for slot in 0..width {
            add(&mut builder, &node_name(layers - 1, slot), SINK, &mut rng)?;
        }
    }

    Ok(builder.build())
}
