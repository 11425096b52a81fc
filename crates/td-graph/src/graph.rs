//! Core graph data structures.

use td_core::ComponentKey;

use crate::error::{GraphError, GraphResult};
use crate::indexing::KeyIndex;

/// A named unit of the library with its own dependency edges.
///
/// Internal dependencies are keys into the same graph; external dependencies
/// are opaque references to third-party packages (e.g. `zlib::zlib`) and are
/// passed through unresolved. Both keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub key: ComponentKey,
    /// Human-facing alias; consumers derive a default from `key` when absent.
    pub exported_name: Option<String>,
    pub internal_dependencies: Vec<ComponentKey>,
    pub external_dependencies: Vec<String>,
    /// When true the component links a binary artifact named after `key`.
    pub produces_artifact: bool,
}

impl Component {
    /// A component with no edges that produces an artifact.
    pub fn new(key: ComponentKey) -> Self {
        Self {
            key,
            exported_name: None,
            internal_dependencies: Vec::new(),
            external_dependencies: Vec::new(),
            produces_artifact: true,
        }
    }

    /// Parse keys and build a library component in one step.
    pub fn library(key: &str, internal: &[&str], external: &[&str]) -> GraphResult<Self> {
        let internal_dependencies = internal
            .iter()
            .map(|dep| ComponentKey::new(*dep))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            key: ComponentKey::new(key)?,
            exported_name: None,
            internal_dependencies,
            external_dependencies: external.iter().map(|s| (*s).to_string()).collect(),
            produces_artifact: true,
        })
    }

    pub fn with_exported_name(mut self, name: impl Into<String>) -> Self {
        self.exported_name = Some(name.into());
        self
    }

    pub fn with_artifact(mut self, produces_artifact: bool) -> Self {
        self.produces_artifact = produces_artifact;
        self
    }

    pub fn depends_on(mut self, key: ComponentKey) -> Self {
        self.internal_dependencies.push(key);
        self
    }

    pub fn requires_external(mut self, reference: impl Into<String>) -> Self {
        self.external_dependencies.push(reference.into());
        self
    }
}

/// The component graph: an insertion-ordered registry of components by key.
///
/// The graph does not resolve or validate edges on registration; dangling
/// references surface when something walks them (see `resolve_dependencies`
/// and `validate`). Use `GraphBuilder` to get a validated graph.
#[derive(Debug, Clone, Default)]
pub struct ComponentGraph {
    pub(crate) components: Vec<Component>,
    pub(crate) index: KeyIndex,
}

impl ComponentGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new component.
    ///
    /// Fails with `DuplicateKey` if the key is already present; the graph is
    /// left unchanged.
    pub fn register(&mut self, component: Component) -> GraphResult<()> {
        match self.index.insert(component.key.clone()) {
            Ok(_) => {
                self.components.push(component);
                Ok(())
            }
            Err(_) => Err(GraphError::DuplicateKey { key: component.key }),
        }
    }

    /// Look up a component by key.
    pub fn get(&self, key: &str) -> GraphResult<&Component> {
        self.find(key).ok_or_else(|| GraphError::NotFound {
            key: key.to_string(),
        })
    }

    /// Look up a component by key, returning None if absent.
    pub fn find(&self, key: &str) -> Option<&Component> {
        self.index.position(key).map(|pos| &self.components[pos])
    }

    /// Iterate over all components in insertion order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// All keys in insertion order.
    pub fn keys(&self) -> &[ComponentKey] {
        self.index.keys()
    }

    /// Insertion position of a key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.position(key)
    }

    /// Resolve a component's internal dependencies, in declared order.
    ///
    /// The first dependency missing from the graph fails with `NotFound`.
    pub fn resolve_dependencies(&self, component: &Component) -> GraphResult<Vec<&Component>> {
        component
            .internal_dependencies
            .iter()
            .map(|dep| self.get(dep.as_str()))
            .collect()
    }

    pub(crate) fn at(&self, pos: usize) -> &Component {
        &self.components[pos]
    }
}

impl<'a> IntoIterator for &'a ComponentGraph {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
