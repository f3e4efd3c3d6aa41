use std::path::{Path, PathBuf};

use gantry_extension_api::{
    GANTRY_EXTENSION_API_VERSION, GxExtensionDecl, GxExtensionEntry, GxHostVTable,
};
use libloading::{Library, Symbol};
use tracing::debug;

use crate::error::{Error, LoadFailure, Result};
use crate::resolution::ExtensionResolution;
use crate::util::gxstr_to_string_lossy;

/// Isolated code-loading scope for one consumption of a resolution.
///
/// Every artifact is mapped as its own dynamic library, in resolution
/// order. Scopes are never shared, cached or reused: each apply opens a
/// fresh one, so state inside the artifacts does not leak across
/// applications.
pub struct ExtensionScope {
    libraries: Vec<(PathBuf, Library)>,
}

impl ExtensionScope {
    /// Maps every artifact of `resolution`.
    pub fn open(resolution: &ExtensionResolution) -> Result<Self> {
        let mut libraries = Vec::with_capacity(resolution.artifacts().len());
        for path in resolution.artifacts() {
            if !path.exists() {
                return Err(Error::load(
                    LoadFailure::MissingArtifact,
                    format!("artifact `{}` does not exist", path.display()),
                ));
            }
            // SAFETY: mapping executable code; artifact initializers run
            // here. Whoever produced the resolution made the trust call.
            let library = unsafe { Library::new(path) }.map_err(|source| {
                Error::load_with_source(
                    LoadFailure::ScopeConstruction,
                    format!("cannot map artifact `{}`", path.display()),
                    source,
                )
            })?;
            libraries.push((path.clone(), library));
        }
        Ok(Self { libraries })
    }

    pub fn artifact_paths(&self) -> impl Iterator<Item = &Path> {
        self.libraries.iter().map(|(path, _)| path.as_path())
    }

    /// Resolves `entry_symbol` by probing the artifacts in resolution order
    /// and calls it.
    fn resolve_entry(&self, entry_symbol: &str) -> Result<*const GxExtensionDecl> {
        let mut last_error = None;
        for (path, library) in &self.libraries {
            // SAFETY: the symbol signature is fixed by the extension ABI.
            let entry: Symbol<GxExtensionEntry> =
                match unsafe { library.get(entry_symbol.as_bytes()) } {
                    Ok(entry) => entry,
                    Err(source) => {
                        last_error = Some(source);
                        continue;
                    },
                };
            debug!(
                target: "gantry_extensions::load",
                entry_symbol,
                artifact = %path.display(),
                "entry point found"
            );
            // SAFETY: the entry returns a pointer to declaration data owned
            // by the mapped artifact; validated by the caller.
            return Ok(unsafe { entry() });
        }

        let detail = if self.libraries.is_empty() {
            format!("symbol `{entry_symbol}` unresolvable: scope contains no artifacts")
        } else {
            let artifacts = self
                .libraries
                .iter()
                .map(|(path, _)| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("symbol `{entry_symbol}` not found in any artifact ({artifacts})")
        };
        Err(match last_error {
            Some(source) => {
                Error::load_with_source(LoadFailure::EntryPointLookup, detail, source)
            },
            None => Error::load(LoadFailure::EntryPointLookup, detail),
        })
    }
}

/// A declaration resolved inside a scope, plus the scope keeping its code
/// mapped.
///
/// Dropping the value unmaps the artifacts; a target that retains applied
/// extensions must keep the `LoadedExtension` alive.
pub struct LoadedExtension {
    id: String,
    display_name: String,
    decl: *const GxExtensionDecl,
    scope: ExtensionScope,
}

// The decl is immutable static data inside the mapped libraries, which live
// exactly as long as this value.
unsafe impl Send for LoadedExtension {}
unsafe impl Sync for LoadedExtension {}

impl LoadedExtension {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn artifact_paths(&self) -> impl Iterator<Item = &Path> {
        self.scope.artifact_paths()
    }

    /// Invokes the extension's configure hook against `host`.
    ///
    /// Runs once per call; applying an extension twice configures the
    /// target twice.
    pub fn configure(&self, host: &GxHostVTable) -> Result<()> {
        // SAFETY: `scope` keeps the decl mapped for the life of `self`.
        let decl = unsafe { &*self.decl };
        let Some(configure) = decl.configure else {
            return Err(Error::load(
                LoadFailure::IncompatibleDeclaration,
                format!("extension `{}` declares no configure hook", self.id),
            ));
        };
        let status = configure(host as *const GxHostVTable);
        if status.is_ok() {
            Ok(())
        } else {
            Err(Error::configure(self.id.clone(), status.code))
        }
    }
}

/// Loads `resolution` into a fresh scope and resolves its declaration.
pub fn load_resolution(resolution: &ExtensionResolution) -> Result<LoadedExtension> {
    let scope = ExtensionScope::open(resolution)?;
    let decl_ptr = scope.resolve_entry(resolution.entry_symbol())?;
    if decl_ptr.is_null() {
        return Err(Error::load(
            LoadFailure::IncompatibleDeclaration,
            format!(
                "entry `{}` returned a null declaration",
                resolution.entry_symbol()
            ),
        ));
    }

    // SAFETY: non-null pointer from the entry point; the scope keeps the
    // declaration and its strings mapped.
    let decl = unsafe { &*decl_ptr };
    if decl.api_version != GANTRY_EXTENSION_API_VERSION {
        return Err(Error::load(
            LoadFailure::IncompatibleDeclaration,
            format!(
                "extension api version {} does not match host api version {}",
                decl.api_version, GANTRY_EXTENSION_API_VERSION
            ),
        ));
    }

    // SAFETY: decl strings are artifact-owned UTF-8 views, valid while
    // mapped.
    let id = unsafe { gxstr_to_string_lossy(decl.id_utf8) };
    let display_name = unsafe { gxstr_to_string_lossy(decl.display_name_utf8) };
    if id.trim().is_empty() {
        return Err(Error::load(
            LoadFailure::IncompatibleDeclaration,
            "extension declaration has an empty id".to_string(),
        ));
    }

    debug!(
        target: "gantry_extensions::load",
        extension_id = %id,
        entry_symbol = resolution.entry_symbol(),
        "extension loaded"
    );
    Ok(LoadedExtension {
        id,
        display_name,
        decl: decl_ptr,
        scope,
    })
}
