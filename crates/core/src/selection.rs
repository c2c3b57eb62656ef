use super::pool::Path;
use common::types::PathSummary;

/// A path paired with its cumulative product.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedPath<'a> {
    pub nodes: Path<'a>,
    pub value: f64,
}

impl ValuedPath<'_> {
    /// Node names from start to end.
    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name()).collect()
    }

    /// Detaches the path from the pool it borrows from.
    pub fn to_summary(&self) -> PathSummary {
        PathSummary {
            nodes: self.nodes.iter().map(|node| node.name().to_string()).collect(),
            value: self.value,
        }
    }
}

/// Index of the largest value. The first index wins on ties; `None` if `values` is empty.
pub fn best_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            Some(b) if values[b] >= value => {}
            _ => best = Some(i),
        }
    }
    best
}
