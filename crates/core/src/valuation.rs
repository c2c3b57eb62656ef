use super::pool::{Node, Path};
use super::weights::WeightTable;
use common::error::Error;

/// Product of the edge weights along `path`.
///
/// A single-node (or empty) path is worth the empty product, `1.0`.
///
/// # Errors
/// Returns `Error::MissingEdge` for the first consecutive pair without a weight.
pub fn path_value(path: &[&Node], weights: &WeightTable) -> Result<f64, Error> {
    path.windows(2).try_fold(1.0, |product, pair| {
        Ok(product * weights.weight(pair[0].name(), pair[1].name())?)
    })
}

/// Values of `paths`, index-aligned with the input so callers can pick an argmax.
pub fn path_values(paths: &[Path<'_>], weights: &WeightTable) -> Result<Vec<f64>, Error> {
    paths.iter().map(|path| path_value(path, weights)).collect()
}
