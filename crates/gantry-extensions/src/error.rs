use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Stage at which loading an extension's code fell over. All stages share
/// one error kind; callers that care match on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    MissingArtifact,
    ScopeConstruction,
    EntryPointLookup,
    IncompatibleDeclaration,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::MissingArtifact => "missing artifact",
            Self::ScopeConstruction => "scope construction failed",
            Self::EntryPointLookup => "entry point lookup failed",
            Self::IncompatibleDeclaration => "incompatible declaration",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The target opted out of extension support. A configuration mistake,
    /// not a broken extension.
    #[error("target `{target}` does not accept extensions")]
    NotExtensible { target: String },
    #[error("no resolver could resolve extension `{id}`")]
    Unresolved { id: String },
    #[error("cannot load extension ({kind}): {detail}")]
    Load {
        kind: LoadFailure,
        detail: String,
        #[source]
        source: Option<libloading::Error>,
    },
    #[error("target `{target}` rejected extension entry `{entry_symbol}`: {source}")]
    Apply {
        target: String,
        entry_symbol: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("extension `{id}` configure hook returned status {status}")]
    Configure { id: String, status: i32 },
}

impl Error {
    pub fn not_extensible(target: impl Into<String>) -> Self {
        Self::NotExtensible {
            target: target.into(),
        }
    }

    pub fn unresolved(id: impl Into<String>) -> Self {
        Self::Unresolved { id: id.into() }
    }

    pub fn load(kind: LoadFailure, detail: impl Into<String>) -> Self {
        Self::Load {
            kind,
            detail: detail.into(),
            source: None,
        }
    }

    pub fn load_with_source(
        kind: LoadFailure,
        detail: impl Into<String>,
        source: libloading::Error,
    ) -> Self {
        Self::Load {
            kind,
            detail: detail.into(),
            source: Some(source),
        }
    }

    pub fn apply(
        target: impl Into<String>,
        entry_symbol: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::Apply {
            target: target.into(),
            entry_symbol: entry_symbol.into(),
            source: source.into(),
        }
    }

    pub fn configure(id: impl Into<String>, status: i32) -> Self {
        Self::Configure {
            id: id.into(),
            status,
        }
    }

    pub fn is_not_extensible(&self) -> bool {
        matches!(self, Self::NotExtensible { .. })
    }

    /// The load-failure category, if this is a load error.
    pub fn load_failure(&self) -> Option<LoadFailure> {
        match self {
            Self::Load { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
