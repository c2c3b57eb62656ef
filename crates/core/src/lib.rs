//! Path search over graphs whose edges carry positive multiplicative weights.
//!
//! Two strategies answer "which route from `start` to `end` has the largest
//! product of rates":
//! - [`AllPathsEnumerator`] lists every simple path and values each one;
//! - [`MaxProductSolver`] relaxes log-transformed weights and returns one
//!   optimal path directly.

pub mod context;
pub mod enumerator;
pub mod fixtures;
pub mod pool;
pub mod selection;
pub mod solver;
pub mod traits;
pub mod valuation;
pub mod weights;

pub use common::error::Error;
pub use context::{GraphBuilder, GraphContext};
pub use enumerator::{AllPathsEnumerator, EnumerationLimits, enumerate_all_paths};
pub use pool::{Node, NodePool, Path};
pub use selection::{ValuedPath, best_index};
pub use solver::{MaxProductSolver, max_product_path};
pub use traits::PathStrategy;
pub use valuation::{path_value, path_values};
pub use weights::WeightTable;
