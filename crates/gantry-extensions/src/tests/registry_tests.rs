use std::path::{Path, PathBuf};

use crate::resolution::ExtensionResolution;

use super::{
    ExtensionManifest, ExtensionRegistry, discover_extensions,
    manifest_path_for_extension_root, registry_from_dir,
};

fn write_extension(
    dir: &Path,
    folder: &str,
    manifest: &serde_json::Value,
    libs: &[&str],
) -> PathBuf {
    let root = dir.join(folder);
    std::fs::create_dir_all(&root).expect("create extension dir");
    std::fs::write(
        manifest_path_for_extension_root(&root),
        serde_json::to_string_pretty(manifest).expect("serialize manifest"),
    )
    .expect("write manifest");
    for lib in libs {
        std::fs::write(root.join(lib), b"").expect("write artifact stub");
    }
    root
}

#[test]
fn discovery_skips_broken_manifests() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let dir = temp.path();

    write_extension(
        dir,
        "hello",
        &serde_json::json!({
            "id": "demo.hello",
            "api_version": 1,
            "libraries": ["libhello.so"],
        }),
        &["libhello.so"],
    );
    let broken = dir.join("broken");
    std::fs::create_dir_all(&broken).expect("create broken dir");
    std::fs::write(manifest_path_for_extension_root(&broken), b"not json")
        .expect("write broken manifest");
    write_extension(
        dir,
        "wrong-api",
        &serde_json::json!({
            "id": "demo.wrong-api",
            "api_version": 99,
            "libraries": ["libwrong.so"],
        }),
        &["libwrong.so"],
    );
    write_extension(
        dir,
        "gone",
        &serde_json::json!({
            "id": "demo.gone",
            "api_version": 1,
            "libraries": ["libgone.so"],
        }),
        &[],
    );
    write_extension(
        dir,
        "empty",
        &serde_json::json!({
            "id": "demo.empty",
            "api_version": 1,
            "libraries": [],
        }),
        &[],
    );

    let discovered = discover_extensions(dir).expect("discover");
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].manifest.id, "demo.hello");
    assert_eq!(discovered[0].manifest.entry_symbol(), "gantry_extension_entry");
    assert_eq!(
        discovered[0].artifact_paths,
        vec![dir.join("hello").join("libhello.so")]
    );
}

#[test]
fn discovery_of_missing_dir_is_empty() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let registry =
        registry_from_dir(temp.path().join("no-such-dir")).expect("build registry");
    assert!(registry.is_empty());
}

#[test]
fn resolution_preserves_artifact_order() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let root = write_extension(
        temp.path(),
        "layered",
        &serde_json::json!({
            "id": "demo.layered",
            "api_version": 1,
            "entry_symbol": "layered_entry",
            "libraries": ["libcore.so", "libextra.so"],
        }),
        &["libextra.so", "libcore.so"],
    );

    let discovered = discover_extensions(temp.path()).expect("discover");
    assert_eq!(discovered.len(), 1);
    let resolution = discovered[0].resolution();
    assert_eq!(resolution.entry_symbol(), "layered_entry");
    assert_eq!(
        resolution.artifacts(),
        &[root.join("libcore.so"), root.join("libextra.so")]
    );
}

#[test]
fn duplicate_ids_keep_first_by_path() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let manifest = serde_json::json!({
        "id": "demo.dup",
        "api_version": 1,
        "libraries": ["libdup.so"],
    });
    let first = write_extension(temp.path(), "aaa", &manifest, &["libdup.so"]);
    write_extension(temp.path(), "bbb", &manifest, &["libdup.so"]);

    let registry = registry_from_dir(temp.path()).expect("build registry");
    assert_eq!(registry.len(), 1);
    let resolution = registry.lookup("demo.dup").expect("lookup demo.dup");
    assert_eq!(resolution.artifacts(), &[first.join("libdup.so")]);
}

#[test]
fn register_replaces_and_returns_prior() {
    let mut registry = ExtensionRegistry::new();
    let first = ExtensionResolution::new("entry_a", vec![PathBuf::from("a.so")]);
    let second = ExtensionResolution::new("entry_b", vec![PathBuf::from("b.so")]);

    assert!(registry.register("demo.swap", first.clone()).is_none());
    assert_eq!(registry.register("demo.swap", second.clone()), Some(first));
    assert_eq!(registry.lookup("demo.swap"), Some(second));
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["demo.swap"]);
}

#[test]
fn manifest_entry_symbol_defaults_to_api_const() {
    let manifest = ExtensionManifest {
        id: "demo.default".to_string(),
        api_version: 1,
        name: None,
        entry_symbol: None,
        libraries: vec!["lib.so".to_string()],
    };
    assert_eq!(
        manifest.entry_symbol(),
        gantry_extension_api::GANTRY_EXTENSION_ENTRY_SYMBOL
    );

    let manifest = ExtensionManifest {
        entry_symbol: Some("custom_entry".to_string()),
        ..manifest
    };
    assert_eq!(manifest.entry_symbol(), "custom_entry");
}
