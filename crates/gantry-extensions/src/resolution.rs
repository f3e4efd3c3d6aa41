use std::path::PathBuf;

/// Where an extension's code lives and how to enter it: an entry-point
/// symbol plus the ordered artifacts to search for it.
///
/// Immutable once produced. Artifact order is mapping and lookup order and
/// is preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionResolution {
    entry_symbol: String,
    artifacts: Vec<PathBuf>,
}

impl ExtensionResolution {
    pub fn new(entry_symbol: impl Into<String>, artifacts: Vec<PathBuf>) -> Self {
        Self {
            entry_symbol: entry_symbol.into(),
            artifacts,
        }
    }

    pub fn entry_symbol(&self) -> &str {
        &self.entry_symbol
    }

    pub fn artifacts(&self) -> &[PathBuf] {
        &self.artifacts
    }
}
