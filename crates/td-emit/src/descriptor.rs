//! Emitted metadata records.

use serde::{Deserialize, Serialize};
use td_core::{ComponentKey, TargetPlatform};

/// How a package and its components are named for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNaming {
    /// Package name, e.g. `tdlib`.
    pub package: String,
    /// Package-wide file-name lookup alias, e.g. `Td`.
    pub file_name: String,
    /// Namespace of exported build targets, e.g. `Td` in `Td::TdStatic`.
    pub target_namespace: String,
    /// Prefix turning a component key into its package-local identifier.
    pub component_prefix: String,
}

impl PackageNaming {
    /// Package-local identifier of a component (`td_` + lower-cased key).
    pub fn component_id(&self, key: &ComponentKey) -> String {
        key.namespaced(&self.component_prefix)
    }

    pub fn target(&self, name: &str) -> String {
        format!("{}::{}", self.target_namespace, name)
    }
}

/// Metadata for one component, ready for a build-configuration exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Package-local identifier, usable as a downstream build-target id.
    pub name: String,
    pub key: ComponentKey,
    /// The component's exported name, or `name` when it has none.
    pub exported_name: String,
    pub target_name: String,
    pub file_name: String,
    /// Sibling component identifiers followed by external package references.
    pub requirement_references: Vec<String>,
    /// Artifacts to link; `[key]` for artifact-producing components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_targets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform_extra_links: Vec<String>,
}

impl ComponentDescriptor {
    /// Requirement references followed by the platform's extra system libraries.
    pub fn link_requirements(&self) -> Vec<&str> {
        self.requirement_references
            .iter()
            .chain(&self.platform_extra_links)
            .map(String::as_str)
            .collect()
    }
}

/// Complete metadata set for one package build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub package: String,
    pub version: String,
    pub shared: bool,
    pub platform: TargetPlatform,
    pub file_name: String,
    pub target_name: String,
    pub components: Vec<ComponentDescriptor>,
}

impl PackageDescriptor {
    /// Find a component by its package-local identifier.
    pub fn component(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Find a component by graph key.
    pub fn by_key(&self, key: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.key.as_str() == key)
    }
}
