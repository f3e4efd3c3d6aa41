use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gantry_extension_api::GANTRY_EXTENSION_API_VERSION;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::resolution::ExtensionResolution;

pub const EXTENSION_MANIFEST_FILE_NAME: &str = "extension.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    pub id: String,
    pub api_version: u32,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub entry_symbol: Option<String>,

    /// Artifact paths relative to the manifest's directory, in lookup order.
    pub libraries: Vec<String>,
}

impl ExtensionManifest {
    pub fn entry_symbol(&self) -> &str {
        self.entry_symbol
            .as_deref()
            .unwrap_or(gantry_extension_api::GANTRY_EXTENSION_ENTRY_SYMBOL)
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveredExtension {
    pub root_dir: PathBuf,
    pub manifest: ExtensionManifest,
    pub artifact_paths: Vec<PathBuf>,
}

impl DiscoveredExtension {
    pub fn resolution(&self) -> ExtensionResolution {
        ExtensionResolution::new(self.manifest.entry_symbol(), self.artifact_paths.clone())
    }
}

pub fn manifest_path_for_extension_root(root: &Path) -> PathBuf {
    root.join(EXTENSION_MANIFEST_FILE_NAME)
}

pub fn read_manifest(path: &Path) -> Result<ExtensionManifest> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str::<ExtensionManifest>(&text)
        .with_context(|| format!("parse {}", path.display()))
}

/// Scans `dir` for extension manifests.
///
/// Malformed manifests, api-version mismatches and manifests naming missing
/// artifacts are skipped with a warning; they never fail the scan. A missing
/// `dir` yields an empty list. Results are sorted by id, then root dir.
pub fn discover_extensions(dir: impl AsRef<Path>) -> Result<Vec<DiscoveredExtension>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .follow_links(false)
        .max_depth(3)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy() != EXTENSION_MANIFEST_FILE_NAME {
            continue;
        }

        let manifest_path = entry.path().to_path_buf();
        let Some(root_dir) = manifest_path.parent().map(Path::to_path_buf) else {
            continue;
        };

        let manifest = match read_manifest(&manifest_path) {
            Ok(v) => v,
            Err(e) => {
                warn!(
                    target: "gantry_extensions::discover",
                    manifest = %manifest_path.display(),
                    "skip unreadable extension manifest: {e:#}"
                );
                continue;
            },
        };

        if manifest.id.trim().is_empty() {
            warn!(
                target: "gantry_extensions::discover",
                manifest = %manifest_path.display(),
                "skip extension manifest with empty id"
            );
            continue;
        }

        if manifest.api_version != GANTRY_EXTENSION_API_VERSION {
            warn!(
                target: "gantry_extensions::discover",
                manifest = %manifest_path.display(),
                extension_id = %manifest.id,
                found = manifest.api_version,
                expected = GANTRY_EXTENSION_API_VERSION,
                "skip extension with unsupported api version"
            );
            continue;
        }

        if manifest.libraries.is_empty() {
            warn!(
                target: "gantry_extensions::discover",
                manifest = %manifest_path.display(),
                extension_id = %manifest.id,
                "skip extension manifest without libraries"
            );
            continue;
        }

        let artifact_paths: Vec<PathBuf> = manifest
            .libraries
            .iter()
            .map(|rel| root_dir.join(rel))
            .collect();
        if let Some(missing) = artifact_paths.iter().find(|p| !p.exists()) {
            warn!(
                target: "gantry_extensions::discover",
                manifest = %manifest_path.display(),
                extension_id = %manifest.id,
                artifact = %missing.display(),
                "skip extension with missing artifact"
            );
            continue;
        }

        out.push(DiscoveredExtension {
            root_dir,
            manifest,
            artifact_paths,
        });
    }

    out.sort_by(|a, b| {
        (a.manifest.id.as_str(), a.root_dir.as_path())
            .cmp(&(b.manifest.id.as_str(), b.root_dir.as_path()))
    });
    Ok(out)
}

/// In-process mapping from extension ids to resolutions.
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    entries: BTreeMap<String, ExtensionResolution>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resolution` under `id`, returning the entry it replaced.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        resolution: ExtensionResolution,
    ) -> Option<ExtensionResolution> {
        self.entries.insert(id.into(), resolution)
    }

    pub fn lookup(&self, id: &str) -> Option<ExtensionResolution> {
        self.entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Discovers extensions under `dir` and registers their resolutions.
///
/// The first manifest per id wins; later ones are skipped with a warning.
pub fn registry_from_dir(dir: impl AsRef<Path>) -> Result<ExtensionRegistry> {
    let mut registry = ExtensionRegistry::new();
    for discovered in discover_extensions(dir)? {
        if registry.contains(&discovered.manifest.id) {
            warn!(
                target: "gantry_extensions::discover",
                extension_id = %discovered.manifest.id,
                root = %discovered.root_dir.display(),
                "skip duplicate extension id"
            );
            continue;
        }
        let resolution = discovered.resolution();
        registry.register(discovered.manifest.id, resolution);
    }
    Ok(registry)
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
