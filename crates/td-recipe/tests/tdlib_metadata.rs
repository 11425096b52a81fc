//! End-to-end metadata emission for the built-in TDLib recipe.

use td_core::{Arch, CompilerFamily, Os, TargetPlatform};
use td_emit::{MetadataEmitter, PackageDescriptor, fingerprint};
use td_graph::{GraphBuilder, GraphError};
use td_recipe::tdlib;

fn emit(platform: TargetPlatform) -> PackageDescriptor {
    let manifest = tdlib::manifest();
    let graph = manifest.component_graph().unwrap();
    let rules = manifest.platform_rules().unwrap();
    let naming = manifest.naming();
    MetadataEmitter::new(&graph, &naming)
        .with_rules(&rules)
        .emit(&manifest.build_config(platform))
        .unwrap()
}

fn windows_msvc() -> TargetPlatform {
    TargetPlatform::new(Os::Windows, CompilerFamily::Msvc, Arch::X86_64)
}

fn windows_mingw() -> TargetPlatform {
    TargetPlatform::new(Os::Windows, CompilerFamily::Gcc, Arch::X86_64)
}

fn linux() -> TargetPlatform {
    TargetPlatform::new(Os::Linux, CompilerFamily::Gcc, Arch::X86_64)
}

#[test]
fn tdcore_requirements_keep_declared_order() {
    let pkg = emit(linux());
    let core = pkg.by_key("tdcore").unwrap();
    assert_eq!(
        core.requirement_references,
        vec![
            "td_tdapi",
            "td_tdactor",
            "td_tdutils",
            "td_tdnet",
            "td_tddb",
            "zlib::zlib",
            "openssl::openssl",
        ]
    );
    assert_eq!(core.link_targets, vec!["tdcore"]);
}

#[test]
fn descriptors_follow_graph_order() {
    let pkg = emit(linux());
    let names: Vec<_> = pkg.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "td_tdclient",
            "td_tdjson",
            "td_tdjson_static",
            "td_tdapi",
            "td_tdutils",
            "td_tdcore",
            "td_tdjson_private",
            "td_tdactor",
            "td_tdnet",
            "td_tddb",
            "td_tdsqlite",
        ]
    );
}

#[test]
fn exported_names_become_targets() {
    let pkg = emit(linux());
    let client = pkg.component("td_tdclient").unwrap();
    assert_eq!(client.target_name, "Td::TdStatic");
    assert_eq!(client.file_name, "TdStatic");
    assert_eq!(client.requirement_references, vec!["td_tdapi", "td_tdutils", "td_tdcore"]);

    let json = pkg.component("td_tdjson").unwrap();
    assert_eq!(json.target_name, "Td::TdJson");
    assert_eq!(json.requirement_references, vec!["td_tdjson_private"]);

    assert_eq!(pkg.file_name, "Td");
    assert_eq!(pkg.target_name, "Td");
    assert_eq!(pkg.version, "1.8.25");
    assert!(!pkg.shared);
}

#[test]
fn windows_rules_hit_exactly_the_listed_components() {
    let pkg = emit(windows_msvc());
    let with_extras: Vec<_> = pkg
        .components
        .iter()
        .filter(|c| !c.platform_extra_links.is_empty())
        .map(|c| c.key.as_str())
        .collect();
    assert_eq!(
        with_extras,
        vec!["tdjson", "tdjson_static", "tdutils", "tdcore", "tdnet", "tdsqlite"]
    );

    assert_eq!(
        pkg.by_key("tdutils").unwrap().platform_extra_links,
        vec!["Crypt32", "ws2_32", "Mswsock", "Normaliz", "psapi", "shell32"]
    );
    for key in ["tdcore", "tdsqlite", "tdnet", "tdjson", "tdjson_static"] {
        assert_eq!(
            pkg.by_key(key).unwrap().platform_extra_links,
            vec!["Crypt32", "ws2_32", "Mswsock"],
            "{key}"
        );
    }
}

#[test]
fn non_msvc_windows_uses_lowercase_names() {
    let pkg = emit(windows_mingw());
    assert_eq!(
        pkg.by_key("tdnet").unwrap().platform_extra_links,
        vec!["crypt32", "ws2_32", "mswsock"]
    );
}

#[test]
fn other_platforms_get_no_extra_links() {
    for platform in [
        linux(),
        TargetPlatform::new(Os::Macos, CompilerFamily::AppleClang, Arch::Armv8),
        TargetPlatform::new(Os::Android, CompilerFamily::Clang, Arch::Armv7),
    ] {
        let pkg = emit(platform);
        assert!(
            pkg.components.iter().all(|c| c.platform_extra_links.is_empty()),
            "{platform}"
        );
    }
}

#[test]
fn platform_rules_do_not_touch_requirements() {
    let base = emit(linux());
    let win = emit(windows_msvc());
    for (b, w) in base.components.iter().zip(&win.components) {
        assert_eq!(b.requirement_references, w.requirement_references);
        assert!(w.link_requirements().starts_with(&b.link_requirements()));
    }
}

#[test]
fn repeated_emission_is_identical() {
    let a = emit(windows_msvc());
    let b = emit(windows_msvc());
    assert_eq!(a, b);
    assert_eq!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    assert_ne!(
        fingerprint(&a).unwrap(),
        fingerprint(&emit(linux())).unwrap()
    );
}

#[test]
fn duplicate_component_produces_no_graph() {
    let manifest = tdlib::manifest();
    let mut builder = GraphBuilder::new();
    for def in &manifest.components {
        builder.add(def.to_component().unwrap());
    }
    builder.add(manifest.components[4].to_component().unwrap());

    match builder.build() {
        Err(GraphError::DuplicateKey { key }) => assert_eq!(key.as_str(), "tdutils"),
        other => panic!("expected duplicate key, got {other:?}"),
    }
}
