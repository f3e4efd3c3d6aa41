use std::sync::Arc;

use crate::registry::ExtensionRegistry;
use crate::resolution::ExtensionResolution;

/// Strategy for mapping an extension id to a resolution.
///
/// Absence is `None`, never an error: a handler consults its resolvers in
/// order and stops at the first hit.
pub trait ResolveExtension: Send + Sync {
    fn try_resolve(&self, id: &str) -> Option<ExtensionResolution>;
}

/// Resolver backed by a shared registry. Installed first on every working
/// handler.
pub struct RegistryResolver {
    registry: Arc<ExtensionRegistry>,
}

impl RegistryResolver {
    pub fn new(registry: Arc<ExtensionRegistry>) -> Self {
        Self { registry }
    }
}

impl ResolveExtension for RegistryResolver {
    fn try_resolve(&self, id: &str) -> Option<ExtensionResolution> {
        self.registry.lookup(id)
    }
}
