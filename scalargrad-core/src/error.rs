use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// The base/exponent combination has no finite real-valued derivative
    /// (`0^e` with `e < 1`, a negative base with a non-integral exponent,
    /// a non-finite exponent, or a zero divisor).
    #[error("Domain error in {operation}: base {base} with exponent {exponent} has no finite real derivative")]
    DomainError {
        operation: String,
        base: f64,
        exponent: f64,
    },

    /// The computation graph is not a DAG, or a backward rule disagrees
    /// with the node's recorded inputs.
    #[error("Graph integrity violated during {operation}: {reason}")]
    GraphIntegrityError { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("In-place modification error in {operation}: {reason}")]
    InplaceModificationError { operation: String, reason: String },

    #[error("Invalid hyperparameter `{name}`: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Cannot compute a loss over an empty list of values")]
    EmptyValueList,
}
