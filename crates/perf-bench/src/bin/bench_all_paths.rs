use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use rate_path_core::{AllPathsEnumerator, PathStrategy};

fn main() {
    let context = generate_layered_graph(NUM_LAYERS, LAYER_WIDTH, SEED)
        .expect("benchmark rates are positive");

    let start_time = Instant::now();

    // Every simple path is materialised and valued before the argmax.
    let best = AllPathsEnumerator::new()
        .best_path(&context, SOURCE, SINK)
        .expect("benchmark graph is consistent");

    let elapsed_time = start_time.elapsed();

    let best = black_box(best).map(|path| path.to_summary());

    println!(
        "--- All-paths Benchmark Results ({} layers x {}) ---",
        NUM_LAYERS, LAYER_WIDTH
    );
    match best {
        Some(path) => {
            println!("Best product: {:.10}", path.value);
            println!("Route: {}", path.display_route());
        }
        None => println!("No route found."),
    }
    println!("Elapsed Time: {:?}", elapsed_time);
}
