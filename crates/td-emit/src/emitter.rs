//! Single-pass metadata emission over a component graph.

use td_core::{BuildConfig, TargetPlatform};
use td_graph::{Component, ComponentGraph};
use tracing::{debug, info, trace};

use crate::descriptor::{ComponentDescriptor, PackageDescriptor, PackageNaming};
use crate::error::EmitResult;
use crate::platform::PlatformRuleEngine;

/// Walks a graph and produces one descriptor per component, in graph order.
///
/// Emission is all-or-nothing: the first dangling internal reference aborts
/// the pass with `NotFound` and nothing is returned.
#[derive(Debug, Clone, Copy)]
pub struct MetadataEmitter<'a> {
    graph: &'a ComponentGraph,
    naming: &'a PackageNaming,
    rules: Option<&'a PlatformRuleEngine>,
}

impl<'a> MetadataEmitter<'a> {
    /// An emitter that applies no platform rules.
    pub fn new(graph: &'a ComponentGraph, naming: &'a PackageNaming) -> Self {
        Self {
            graph,
            naming,
            rules: None,
        }
    }

    pub fn with_rules(mut self, rules: &'a PlatformRuleEngine) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Emit descriptors for every component, in graph insertion order.
    pub fn emit_components(
        &self,
        platform: &TargetPlatform,
    ) -> EmitResult<Vec<ComponentDescriptor>> {
        let mut out = Vec::with_capacity(self.graph.len());
        for component in self.graph.iter() {
            out.push(self.describe(component, platform)?);
        }
        debug!(components = out.len(), %platform, "emitted component descriptors");
        Ok(out)
    }

    /// Emit the full package descriptor for one build configuration.
    pub fn emit(&self, config: &BuildConfig) -> EmitResult<PackageDescriptor> {
        let components = self.emit_components(&config.platform)?;
        info!(
            package = %self.naming.package,
            version = %config.version,
            platform = %config.platform,
            shared = config.shared,
            "package metadata emitted"
        );
        Ok(PackageDescriptor {
            package: self.naming.package.clone(),
            version: config.version.clone(),
            shared: config.shared,
            platform: config.platform,
            file_name: self.naming.file_name.clone(),
            target_name: self.naming.target_namespace.clone(),
            components,
        })
    }

    fn describe(
        &self,
        component: &Component,
        platform: &TargetPlatform,
    ) -> EmitResult<ComponentDescriptor> {
        let name = self.naming.component_id(&component.key);

        let mut requirement_references = Vec::with_capacity(
            component.internal_dependencies.len() + component.external_dependencies.len(),
        );
        for dep in self.graph.resolve_dependencies(component)? {
            requirement_references.push(self.naming.component_id(&dep.key));
        }
        requirement_references.extend(component.external_dependencies.iter().cloned());

        let link_targets = if component.produces_artifact {
            vec![component.key.to_string()]
        } else {
            Vec::new()
        };

        let platform_extra_links = self
            .rules
            .map(|rules| rules.extra_links(platform, component.key.as_str()))
            .unwrap_or_default();

        let (exported_name, target_name, file_name) = match &component.exported_name {
            Some(exported) => (exported.clone(), self.naming.target(exported), exported.clone()),
            None => (name.clone(), self.naming.target(&name), name.clone()),
        };

        trace!(component = %component.key, requires = ?requirement_references, "described");

        Ok(ComponentDescriptor {
            name,
            key: component.key.clone(),
            exported_name,
            target_name,
            file_name,
            requirement_references,
            link_targets,
            platform_extra_links,
        })
    }
}
