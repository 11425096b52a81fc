//! The built-in TDLib recipe.
//!
//! TDLib is split into eleven library components. `tdclient`, `tdjson` and
//! `tdjson_static` are the public entry points and carry exported names; the
//! rest are internal layers. On Windows several components additionally link
//! the Winsock and crypto system libraries.

use td_core::Os;
use td_emit::{PackageNaming, PlatformRuleEngine, SystemLib};
use td_graph::{ComponentGraph, GraphResult};

use crate::schema::{
    ComponentDef, LATEST_SCHEMA, NamingDef, OptionsDef, PackageDef, PackagingDef, PatchDef,
    PlatformRuleDef, RecipeManifest,
};

pub const NAME: &str = "tdlib";
pub const VERSION: &str = td_core::config::DEFAULT_VERSION;

const ZLIB: &str = "zlib::zlib";
const OPENSSL: &str = "openssl::openssl";

fn component(
    key: &str,
    exported_name: Option<&str>,
    deps: &[&str],
    external: &[&str],
) -> ComponentDef {
    ComponentDef {
        key: key.to_string(),
        exported_name: exported_name.map(str::to_string),
        dependencies: deps.iter().map(|d| (*d).to_string()).collect(),
        external_dependencies: external.iter().map(|e| (*e).to_string()).collect(),
        is_lib: true,
    }
}

fn components() -> Vec<ComponentDef> {
    vec![
        component("tdclient", Some("TdStatic"), &["tdapi", "tdutils", "tdcore"], &[]),
        component("tdjson", Some("TdJson"), &["tdjson_private"], &[]),
        component("tdjson_static", Some("TdJsonStatic"), &["tdjson_private"], &[]),
        component("tdapi", None, &["tdutils"], &[]),
        component("tdutils", None, &[], &[OPENSSL]),
        component(
            "tdcore",
            None,
            &["tdapi", "tdactor", "tdutils", "tdnet", "tddb"],
            &[ZLIB, OPENSSL],
        ),
        component("tdjson_private", None, &["tdclient", "tdutils"], &[]),
        component("tdactor", None, &["tdutils"], &[]),
        component("tdnet", None, &["tdutils", "tdactor"], &[ZLIB, OPENSSL]),
        component("tddb", None, &["tdactor", "tdutils", "tdsqlite"], &[]),
        component("tdsqlite", None, &[], &[ZLIB, OPENSSL]),
    ]
}

fn windows_rules() -> Vec<PlatformRuleDef> {
    let crypt32 = SystemLib::by_compiler("Crypt32", "crypt32");
    let mswsock = SystemLib::by_compiler("Mswsock", "mswsock");
    let ws2_32 = SystemLib::plain("ws2_32");

    vec![
        PlatformRuleDef {
            os: Os::Windows,
            components: vec!["tdutils".into()],
            libs: vec![
                crypt32.clone(),
                ws2_32.clone(),
                mswsock.clone(),
                SystemLib::plain("Normaliz"),
                SystemLib::plain("psapi"),
                SystemLib::plain("shell32"),
            ],
        },
        PlatformRuleDef {
            os: Os::Windows,
            components: ["tdcore", "tdsqlite", "tdnet", "tdjson", "tdjson_static"]
                .into_iter()
                .map(String::from)
                .collect(),
            libs: vec![crypt32, ws2_32, mswsock],
        },
    ]
}

fn packaging() -> PackagingDef {
    PackagingDef {
        source_patches: vec![
            PatchDef {
                file: "CMakeLists.txt".into(),
                find: "if (OPENSSL_FOUND)".into(),
                replace: "if (OPENSSL_FOUND)\n  get_filename_component(OPENSSL_LIB_DIR ${OPENSSL_INCLUDE_DIR} DIRECTORY)\n  link_directories(\"${OPENSSL_LIB_DIR}/lib\")".into(),
            },
            PatchDef {
                file: "CMakeLists.txt".into(),
                find: "add_subdirectory(benchmark)".into(),
                replace: "#add_subdirectory(benchmark)".into(),
            },
        ],
        prune_dirs: vec!["lib/cmake".into(), "lib/pkgconfig".into()],
    }
}

/// The complete TDLib recipe manifest.
pub fn manifest() -> RecipeManifest {
    RecipeManifest {
        schema: LATEST_SCHEMA,
        package: PackageDef {
            name: NAME.into(),
            version: VERSION.into(),
            license: Some("BSL-1.0".into()),
            homepage: Some("https://core.telegram.org/tdlib".into()),
            url: Some("https://github.com/tdlib/td".into()),
            description: Some(
                "TDLib (Telegram Database library) is a cross-platform library for building \
                 Telegram clients. It can be easily used from almost any programming language."
                    .into(),
            ),
            topics: vec!["telegram".into(), "cross-platform".into()],
        },
        options: OptionsDef { shared: false },
        settings: ["os", "compiler", "build_type", "arch"]
            .into_iter()
            .map(String::from)
            .collect(),
        requirements: vec!["zlib".into(), "openssl".into()],
        naming: NamingDef {
            file_name: "Td".into(),
            target_namespace: "Td".into(),
            component_prefix: "td_".into(),
        },
        components: components(),
        platform_rules: windows_rules(),
        packaging: packaging(),
    }
}

/// A fresh TDLib component graph.
pub fn component_graph() -> GraphResult<ComponentGraph> {
    manifest().component_graph()
}

pub fn platform_rules() -> GraphResult<PlatformRuleEngine> {
    manifest().platform_rules()
}

pub fn naming() -> PackageNaming {
    manifest().naming()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_has_all_components_in_order() {
        let graph = component_graph().unwrap();
        let keys: Vec<_> = graph.keys().iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "tdclient",
                "tdjson",
                "tdjson_static",
                "tdapi",
                "tdutils",
                "tdcore",
                "tdjson_private",
                "tdactor",
                "tdnet",
                "tddb",
                "tdsqlite",
            ]
        );
        assert!(graph.iter().all(|c| c.produces_artifact));
    }

    #[test]
    fn only_entry_points_have_exported_names() {
        let graph = component_graph().unwrap();
        let named: Vec<_> = graph
            .iter()
            .filter_map(|c| c.exported_name.as_deref())
            .collect();
        assert_eq!(named, vec!["TdStatic", "TdJson", "TdJsonStatic"]);
    }

    #[test]
    fn naming_uses_td_prefix() {
        let naming = naming();
        assert_eq!(naming.package, "tdlib");
        assert_eq!(naming.file_name, "Td");
        assert_eq!(naming.component_prefix, "td_");
    }
}
