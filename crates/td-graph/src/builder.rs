//! Incremental graph builder.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Component, ComponentGraph};
use crate::validate;

/// Builder for constructing a component graph incrementally.
///
/// Use `add` / `add_library` to collect components, then call `build()` to
/// register them in order, validate, and freeze them into a `ComponentGraph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    components: Vec<Component>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a component for registration.
    pub fn add(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Queue an artifact-producing component given by plain string keys.
    pub fn add_library(
        &mut self,
        key: &str,
        internal: &[&str],
        external: &[&str],
    ) -> GraphResult<&mut Self> {
        let component = Component::library(key, internal, external)?;
        Ok(self.add(component))
    }

    /// Number of queued components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Register every component and reject dependency cycles.
    ///
    /// Fails with `DuplicateKey` on the first repeated key (compared
    /// case-insensitively) and with `Cycle`
    /// if internal dependencies loop. Edges to keys that are not in the graph
    /// are left for the consumer to report (see `build_strict`).
    pub fn build(self) -> GraphResult<ComponentGraph> {
        let graph = self.register_all()?;
        validate::validate_acyclic(&graph)?;
        debug!(components = graph.len(), "component graph built");
        Ok(graph)
    }

    /// Like `build`, but also rejects dangling internal references.
    pub fn build_strict(self) -> GraphResult<ComponentGraph> {
        let graph = self.register_all()?;
        validate::validate_references(&graph)?;
        validate::validate_acyclic(&graph)?;
        debug!(components = graph.len(), "component graph built (strict)");
        Ok(graph)
    }

    /// Keys must also be unique once lower-cased, since emitted identifiers
    /// are derived from the lower-cased key.
    fn register_all(self) -> GraphResult<ComponentGraph> {
        let mut graph = ComponentGraph::new();
        let mut ids: HashSet<String> = HashSet::new();
        for component in self.components {
            if !ids.insert(component.key.namespaced("")) {
                return Err(GraphError::DuplicateKey { key: component.key });
            }
            graph.register(component)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        builder
            .add_library("tdutils", &[], &["openssl::openssl"])
            .unwrap()
            .add_library("tdactor", &["tdutils"], &[])
            .unwrap();
        assert_eq!(builder.len(), 2);

        let graph = builder.build().unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.keys()[1].as_str(), "tdactor");
    }

    #[test]
    fn builder_duplicate_produces_no_graph() {
        let mut builder = GraphBuilder::new();
        builder.add_library("tdapi", &[], &[]).unwrap();
        builder.add_library("tdapi", &["tdutils"], &[]).unwrap();

        let err = builder.build().unwrap_err();
        assert!(matches!(err, GraphError::DuplicateKey { .. }));
    }

    #[test]
    fn builder_rejects_keys_differing_only_by_case() {
        let mut builder = GraphBuilder::new();
        builder
            .add_library("tdcore", &[], &[])
            .unwrap()
            .add_library("TdCore", &[], &[])
            .unwrap()
            .add_library("tdclient", &["TdCore"], &[])
            .unwrap();

        match builder.build() {
            Err(GraphError::DuplicateKey { key }) => assert_eq!(key.as_str(), "TdCore"),
            other => panic!("expected duplicate key, got {other:?}"),
        }

        let mut strict = GraphBuilder::new();
        strict.add_library("tdjson", &[], &[]).unwrap();
        strict.add_library("TDJSON", &[], &[]).unwrap();
        assert!(matches!(
            strict.build_strict(),
            Err(GraphError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn builder_rejects_cycles() {
        let mut builder = GraphBuilder::new();
        builder.add_library("a", &["b"], &[]).unwrap();
        builder.add_library("b", &["a"], &[]).unwrap();
        assert!(matches!(builder.build(), Err(GraphError::Cycle { .. })));
    }

    #[test]
    fn strict_build_rejects_dangling() {
        let mut lenient = GraphBuilder::new();
        lenient.add_library("tddb", &["tdsqlite"], &[]).unwrap();
        assert!(lenient.build().is_ok());

        let mut strict = GraphBuilder::new();
        strict.add_library("tddb", &["tdsqlite"], &[]).unwrap();
        assert!(matches!(
            strict.build_strict(),
            Err(GraphError::DanglingReference { .. })
        ));
    }

    #[test]
    fn invalid_key_is_rejected() {
        let mut builder = GraphBuilder::new();
        assert!(matches!(
            builder.add_library("bad key", &[], &[]),
            Err(GraphError::InvalidKey(_))
        ));
    }
}
