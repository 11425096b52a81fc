//! Error types for metadata emission.

use td_graph::GraphError;
use thiserror::Error;

/// Errors that abort an emission pass.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type EmitResult<T> = Result<T, EmitError>;

impl EmitError {
    /// The missing key, if this error came from a dangling reference.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            EmitError::Graph(GraphError::NotFound { key }) => Some(key),
            _ => None,
        }
    }
}
