use std::path::Path;

use td_recipe::{RecipeError, load, load_yaml, save, tdlib, validate_manifest};

#[test]
fn bundled_recipe_matches_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../recipes/tdlib.yaml");
    let loaded = load_yaml(&path).unwrap_or_else(|e| panic!("Failed to load tdlib.yaml: {e}"));
    assert_eq!(loaded, tdlib::manifest());
}

#[test]
fn roundtrip_yaml() {
    let manifest = tdlib::manifest();
    validate_manifest(&manifest).unwrap();

    let path = std::env::temp_dir().join("td_recipe_roundtrip.yaml");
    save(&path, &manifest).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(manifest, loaded);
}

#[test]
fn roundtrip_json() {
    let manifest = tdlib::manifest();

    let path = std::env::temp_dir().join("td_recipe_roundtrip.json");
    save(&path, &manifest).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(manifest, loaded);
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("td_recipe_roundtrip.toml");
    assert!(matches!(
        save(&path, &tdlib::manifest()),
        Err(RecipeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn invalid_manifest_is_not_saved() {
    let mut manifest = tdlib::manifest();
    manifest.components.push(manifest.components[0].clone());

    let path = std::env::temp_dir().join("td_recipe_invalid.yaml");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        save(&path, &manifest),
        Err(RecipeError::Validation(_))
    ));
    assert!(!path.exists());
}
