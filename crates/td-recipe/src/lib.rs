//! td-recipe: package recipe manifests and the built-in TDLib recipe.

pub mod schema;
pub mod tdlib;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_manifest};

use std::path::Path;

use tracing::debug;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(thiserror::Error, Debug)]
pub enum RecipeError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] td_graph::GraphError),

    #[error("Unsupported manifest format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> RecipeResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(RecipeError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load and validate a manifest, picking the format from the file extension.
pub fn load(path: &Path) -> RecipeResult<RecipeManifest> {
    match format_of(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Validate and save a manifest, picking the format from the file extension.
pub fn save(path: &Path, manifest: &RecipeManifest) -> RecipeResult<()> {
    match format_of(path)? {
        Format::Yaml => save_yaml(path, manifest),
        Format::Json => save_json(path, manifest),
    }
}

pub fn load_yaml(path: &Path) -> RecipeResult<RecipeManifest> {
    let content = std::fs::read_to_string(path)?;
    let manifest: RecipeManifest = serde_yaml::from_str(&content)?;
    validate_manifest(&manifest)?;
    debug!(path = %path.display(), components = manifest.components.len(), "loaded recipe");
    Ok(manifest)
}

pub fn save_yaml(path: &Path, manifest: &RecipeManifest) -> RecipeResult<()> {
    validate_manifest(manifest)?;
    let content = serde_yaml::to_string(manifest)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> RecipeResult<RecipeManifest> {
    let content = std::fs::read_to_string(path)?;
    let manifest: RecipeManifest = serde_json::from_str(&content)?;
    validate_manifest(&manifest)?;
    debug!(path = %path.display(), components = manifest.components.len(), "loaded recipe");
    Ok(manifest)
}

pub fn save_json(path: &Path, manifest: &RecipeManifest) -> RecipeResult<()> {
    validate_manifest(manifest)?;
    let content = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, content)?;
    Ok(())
}
