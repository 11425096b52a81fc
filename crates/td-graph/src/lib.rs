//! td-graph: component dependency graph for tdmeta.
//!
//! Provides:
//! - Core graph data structures (Component, ComponentGraph)
//! - Incremental graph builder with validation
//! - Stable key indexing in insertion order
//! - Reference and acyclicity checks, topological ordering
//!
//! # Example
//!
//! ```
//! use td_graph::{Component, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add(Component::library("tdutils", &[], &["openssl::openssl"]).unwrap());
//! builder.add(Component::library("tdactor", &["tdutils"], &[]).unwrap());
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.get("tdactor").unwrap().internal_dependencies.len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Component, ComponentGraph};
pub use indexing::KeyIndex;
pub use td_core::ComponentKey;
pub use validate::{topological_order, validate_acyclic, validate_references};
