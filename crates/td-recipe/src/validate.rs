//! Manifest validation logic.

use td_core::Os;
use td_graph::{GraphBuilder, GraphError};

use crate::schema::{LATEST_SCHEMA, RecipeManifest};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported schema version: {schema}")]
    UnsupportedSchema { schema: u32 },

    #[error("Missing value: {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid component graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Platform rule for {os} names unknown component {key}")]
    UnknownRuleComponent { os: Os, key: String },
}

/// Validate a manifest: metadata present, graph well formed, rules target real components.
///
/// The graph check is strict: duplicate keys, dangling dependencies and
/// cycles are all rejected.
pub fn validate_manifest(manifest: &RecipeManifest) -> Result<(), ValidationError> {
    if manifest.schema == 0 || manifest.schema > LATEST_SCHEMA {
        return Err(ValidationError::UnsupportedSchema {
            schema: manifest.schema,
        });
    }

    let required = [
        ("package.name", &manifest.package.name),
        ("package.version", &manifest.package.version),
        ("naming.file_name", &manifest.naming.file_name),
        ("naming.target_namespace", &manifest.naming.target_namespace),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField { field });
        }
    }

    let mut builder = GraphBuilder::new();
    for def in &manifest.components {
        builder.add(def.to_component()?);
    }
    let graph = builder.build_strict()?;

    for rule in &manifest.platform_rules {
        for key in &rule.components {
            if !graph.contains(key) {
                return Err(ValidationError::UnknownRuleComponent {
                    os: rule.os,
                    key: key.clone(),
                });
            }
        }
    }

    Ok(())
}
