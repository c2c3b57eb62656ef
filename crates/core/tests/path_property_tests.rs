use common::numeric_kernel::{from_log_space, to_log_space};
use proptest::prelude::*;
use proptest::strategy::Strategy;
use rate_path_core::{
    AllPathsEnumerator, EnumerationLimits, GraphBuilder, GraphContext, PathStrategy,
    enumerate_all_paths, max_product_path, path_value,
};
use std::collections::HashSet;

const NUM_NODES_STRATEGY: std::ops::Range<usize> = 2usize..8;

fn node_name(idx: usize) -> String {
    format!("N{}", idx)
}

/// Random DAG: every edge points from a lower to a higher index, so no cycle
/// can grow the product and the relaxation always terminates.
fn dag_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    NUM_NODES_STRATEGY.prop_flat_map(|num_nodes| {
        let edge_generator = (0usize..num_nodes, 0usize..num_nodes, 0.1f64..10.0);
        let edges_generator = prop::collection::vec(edge_generator, 0..24).prop_map(|edges| {
            edges
                .into_iter()
                .filter(|(a, b, _)| a != b)
                .map(|(a, b, rate)| (a.min(b), a.max(b), rate))
                .collect::<Vec<_>>()
        });

        (proptest::strategy::Just(num_nodes), edges_generator)
    })
}

fn build_context(num_nodes: usize, edges: &[(usize, usize, f64)]) -> GraphContext {
    let mut builder = GraphBuilder::new();
    for idx in 0..num_nodes {
        builder.add_node(&node_name(idx));
    }
    for &(from, to, rate) in edges {
        builder
            .add_edge(&node_name(from), &node_name(to), rate)
            .expect("generated rates are positive");
    }
    builder.build()
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    /// Property: every enumerated path starts at start, ends at end, never repeats
    /// a node, and only follows real edges.
    #[test]
    fn enumerated_paths_are_simple_and_connected((num_nodes, edges) in dag_strategy()) {
        let context = build_context(num_nodes, &edges);
        let start = node_name(0);
        let end = node_name(num_nodes - 1);

        let paths = enumerate_all_paths(&start, &end, context.pool()).unwrap();
        for path in &paths {
            prop_assert_eq!(path.first().unwrap().name(), start.as_str());
            prop_assert_eq!(path.last().unwrap().name(), end.as_str());

            let distinct: HashSet<&str> = path.iter().map(|node| node.name()).collect();
            prop_assert_eq!(distinct.len(), path.len());

            for pair in path.windows(2) {
                prop_assert!(pair[0].has_child(pair[1].name()));
                prop_assert!(context.weights().get(pair[0].name(), pair[1].name()).is_some());
            }
        }
    }

    /// Property: the solver agrees with the brute-force maximum over all paths.
    #[test]
    fn solver_matches_enumeration_oracle((num_nodes, edges) in dag_strategy()) {
        let context = build_context(num_nodes, &edges);
        let start = node_name(0);
        let end = node_name(num_nodes - 1);

        let brute_force = AllPathsEnumerator::new()
            .best_path(&context, &start, &end)
            .unwrap();
        let (value, path) =
            max_product_path(context.pool(), &start, &end, context.weights()).unwrap();

        match brute_force {
            Some(best) => {
                prop_assert!(
                    relative_eq(value, best.value),
                    "solver {} vs brute force {}",
                    value,
                    best.value
                );
                // Ties may pick a different route, but it must be worth the same.
                let solver_value = path_value(&path, context.weights()).unwrap();
                prop_assert!(relative_eq(solver_value, best.value));
                prop_assert_eq!(path.first().unwrap().name(), start.as_str());
            }
            None => {
                prop_assert_eq!(value, 0.0);
                prop_assert_eq!(path.len(), 1);
                prop_assert_eq!(path[0].name(), end.as_str());
            }
        }
    }

    /// Property: enumeration order is reproducible across runs.
    #[test]
    fn enumeration_is_deterministic((num_nodes, edges) in dag_strategy()) {
        let context = build_context(num_nodes, &edges);
        let start = node_name(0);
        let end = node_name(num_nodes - 1);

        let first = enumerate_all_paths(&start, &end, context.pool()).unwrap();
        let second = enumerate_all_paths(&start, &end, context.pool()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: a path-count limit returns a prefix of the unbounded result.
    #[test]
    fn max_paths_returns_prefix((num_nodes, edges) in dag_strategy(), limit in 0usize..5) {
        let context = build_context(num_nodes, &edges);
        let start = node_name(0);
        let end = node_name(num_nodes - 1);

        let all = enumerate_all_paths(&start, &end, context.pool()).unwrap();
        let bounded = AllPathsEnumerator::with_limits(EnumerationLimits {
            max_paths: Some(limit),
            max_depth: None,
        })
        .enumerate(&start, &end, context.pool())
        .unwrap();

        prop_assert_eq!(bounded.len(), all.len().min(limit));
        prop_assert_eq!(&bounded[..], &all[..bounded.len()]);
    }

    /// Property: the log transform round-trips every positive rate.
    #[test]
    fn log_transform_round_trips(rate in 1e-6f64..1e6) {
        prop_assert!(relative_eq(from_log_space(to_log_space(rate)), rate));
    }
}
