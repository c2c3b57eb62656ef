/// Builds the weight-table key of the directed edge `from -> to`.
///
/// Keys are the plain concatenation of both names, matching the layout of
/// quote feeds such as `USDEUR`.
pub fn edge_key(from: &str, to: &str) -> String {
    let mut key = String::with_capacity(from.len() + to.len());
    key.push_str(from);
    key.push_str(to);
    key
}

/// Owned summary of a valued path, detached from the node pool that produced it.
///
/// Fields:
/// - `nodes`: node names from start to end.
/// - `value`: cumulative product of the edge weights along `nodes`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    pub nodes: Vec<String>,
    pub value: f64,
}

impl PathSummary {
    /// Number of edges traversed by the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns true if following the path grows the starting amount (product > 1.0).
    pub fn is_gain(&self) -> bool {
        self.value > 1.0
    }

    /// Renders the path as `A -> B -> C`.
    pub fn display_route(&self) -> String {
        self.nodes.join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_concatenates_names() {
        assert_eq!(edge_key("USD", "EUR"), "USDEUR");
        assert_eq!(edge_key("111", "888"), "111888");
    }

    #[test]
    fn summary_helpers() {
        let summary = PathSummary {
            nodes: vec!["111".into(), "555".into(), "666".into(), "888".into()],
            value: 6.0,
        };
        assert_eq!(summary.hops(), 3);
        assert!(summary.is_gain());
        assert_eq!(summary.display_route(), "111 -> 555 -> 666 -> 888");

        let single = PathSummary {
            nodes: vec!["111".into()],
            value: 1.0,
        };
        assert_eq!(single.hops(), 0);
        assert!(!single.is_gain());
    }
}
