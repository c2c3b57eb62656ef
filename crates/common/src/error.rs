use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A requested node name is absent from the node pool.
    #[error("Node with name {0} does not exist.")]
    NotFound(String),

    /// Two consecutive path nodes have no entry in the weight table.
    #[error("No weight for edge {from} -> {to}.")]
    MissingEdge { from: String, to: String },

    /// A weight violates the strictly-positive precondition of the log transform.
    #[error("Weight {weight} for edge {from} -> {to} must be finite and strictly positive.")]
    DomainError {
        from: String,
        to: String,
        weight: f64,
    },
}
