//! Recipe manifest schema definitions.

use serde::{Deserialize, Serialize};
use td_core::{BuildConfig, ComponentKey, Os, TargetPlatform};
use td_emit::{ComponentRule, PackageNaming, PlatformRuleEngine, SystemLib};
use td_graph::{Component, ComponentGraph, GraphBuilder, GraphResult};

pub const LATEST_SCHEMA: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeManifest {
    pub schema: u32,
    pub package: PackageDef,
    #[serde(default)]
    pub options: OptionsDef,
    /// Build settings the package binary depends on (os, compiler, ...).
    #[serde(default)]
    pub settings: Vec<String>,
    /// Third-party packages the recipe requires.
    #[serde(default)]
    pub requirements: Vec<String>,
    pub naming: NamingDef,
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub platform_rules: Vec<PlatformRuleDef>,
    #[serde(default)]
    pub packaging: PackagingDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageDef {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionsDef {
    /// Default for the "produce shared artifact" option.
    #[serde(default)]
    pub shared: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamingDef {
    pub file_name: String,
    pub target_namespace: String,
    pub component_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_name: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub external_dependencies: Vec<String>,
    #[serde(default = "default_is_lib")]
    pub is_lib: bool,
}

fn default_is_lib() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformRuleDef {
    pub os: Os,
    pub components: Vec<String>,
    pub libs: Vec<SystemLib>,
}

/// Packaging steps carried as data for the I/O wrappers that run them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackagingDef {
    #[serde(default)]
    pub source_patches: Vec<PatchDef>,
    /// Install-tree directories removed after installation, relative to the package root.
    #[serde(default)]
    pub prune_dirs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatchDef {
    pub file: String,
    pub find: String,
    pub replace: String,
}

impl ComponentDef {
    pub fn to_component(&self) -> GraphResult<Component> {
        let mut component = Component::new(ComponentKey::new(self.key.as_str())?)
            .with_artifact(self.is_lib);
        if let Some(name) = &self.exported_name {
            component = component.with_exported_name(name.clone());
        }
        for dep in &self.dependencies {
            component = component.depends_on(ComponentKey::new(dep.as_str())?);
        }
        for ext in &self.external_dependencies {
            component = component.requires_external(ext.clone());
        }
        Ok(component)
    }
}

impl PlatformRuleDef {
    pub fn to_rule(&self) -> GraphResult<ComponentRule> {
        let components = self
            .components
            .iter()
            .map(|c| ComponentKey::new(c.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ComponentRule {
            components,
            libs: self.libs.clone(),
        })
    }
}

impl RecipeManifest {
    /// Build the component graph, registering components in manifest order.
    ///
    /// Dangling dependencies are not rejected here; emission reports them.
    pub fn component_graph(&self) -> GraphResult<ComponentGraph> {
        let mut builder = GraphBuilder::new();
        for def in &self.components {
            builder.add(def.to_component()?);
        }
        builder.build()
    }

    pub fn platform_rules(&self) -> GraphResult<PlatformRuleEngine> {
        let mut engine = PlatformRuleEngine::new();
        for def in &self.platform_rules {
            engine.add_rule(def.os, def.to_rule()?);
        }
        Ok(engine)
    }

    pub fn naming(&self) -> PackageNaming {
        PackageNaming {
            package: self.package.name.clone(),
            file_name: self.naming.file_name.clone(),
            target_namespace: self.naming.target_namespace.clone(),
            component_prefix: self.naming.component_prefix.clone(),
        }
    }

    /// Build configuration for `platform` using the recipe's version and option defaults.
    pub fn build_config(&self, platform: TargetPlatform) -> BuildConfig {
        BuildConfig::new(platform)
            .with_shared(self.options.shared)
            .with_version(self.package.version.clone())
    }
}
