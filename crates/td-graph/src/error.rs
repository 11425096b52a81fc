//! Graph-specific error types.

use td_core::{ComponentKey, TdError};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction, lookup and validation errors.
///
/// All of these point at a defect in the graph definition itself; none is
/// transient, so callers abort rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two components were registered under the same key.
    #[error("Duplicate component key: {key}")]
    DuplicateKey { key: ComponentKey },

    /// A lookup or a dependency reference targets a key that is not in the graph.
    #[error("Component not found: {key}")]
    NotFound { key: String },

    /// A component lists an internal dependency that is not in the graph.
    #[error("Component {component} depends on unknown component {dependency}")]
    DanglingReference {
        component: ComponentKey,
        dependency: ComponentKey,
    },

    /// Internal dependencies form a cycle; the path starts and ends on the same key.
    #[error("Dependency cycle: {}", format_path(.path))]
    Cycle { path: Vec<ComponentKey> },

    #[error("Invalid component key: {0}")]
    InvalidKey(#[from] TdError),
}

fn format_path(path: &[ComponentKey]) -> String {
    path.iter()
        .map(ComponentKey::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl From<GraphError> for TdError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidKey(inner) => inner,
            other => TdError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
