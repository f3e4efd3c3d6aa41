use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::registry::ExtensionRegistry;
use crate::resolution::ExtensionResolution;
use crate::resolver::{RegistryResolver, ResolveExtension};
use crate::scope::load_resolution;
use crate::target::{ConfigurationTarget, ExtensibleTarget};

/// Applies one resolution to the target the handler was built around.
pub type ApplyResolutionFn<'t> = Box<dyn FnMut(&ExtensionResolution) -> Result<()> + 't>;

/// Per-target facade for applying extensions.
///
/// Obtained from [`ExtensionHandlerFactory::handler_for`]; whether the
/// handler actually works depends on the target's extensibility.
pub trait ExtensionHandler {
    /// Resolves `id` through the registered resolvers and applies the
    /// result to the target.
    ///
    /// Resolvers are consulted strictly in registration order and the
    /// first hit wins; resolvers behind it are not invoked.
    fn apply(&mut self, id: &str) -> Result<()>;

    /// Applies an already-resolved extension to the target.
    ///
    /// Every call loads the resolution into a fresh scope and runs the
    /// extension's configure hook again; nothing is cached between calls.
    fn apply_resolution(&mut self, resolution: &ExtensionResolution) -> Result<()>;

    /// Appends a resolver behind the already-registered ones.
    fn add_resolver(&mut self, resolver: Box<dyn ResolveExtension>) -> Result<()>;
}

/// Builds per-target handlers, seeding working ones with the
/// registry-backed resolver.
pub struct ExtensionHandlerFactory {
    registry: Arc<ExtensionRegistry>,
}

impl ExtensionHandlerFactory {
    pub fn new(registry: Arc<ExtensionRegistry>) -> Self {
        Self { registry }
    }

    /// Builds a handler for `target`.
    ///
    /// Extensible targets get a working handler; everything else gets a
    /// handler that fails every mutating call with the not-extensible
    /// error and never resolves, maps or loads anything.
    pub fn handler_for<'t>(
        &self,
        target: &'t mut dyn ConfigurationTarget,
    ) -> Box<dyn ExtensionHandler + 't> {
        let target_name = target.target_name().to_string();
        match target.as_extensible() {
            Some(extensible) => {
                let mut handler = WorkingExtensionHandler::new(apply_into_target(extensible));
                handler.push_resolver(Box::new(RegistryResolver::new(Arc::clone(
                    &self.registry,
                ))));
                Box::new(handler)
            },
            None => {
                debug!(
                    target: "gantry_extensions::handler",
                    target = %target_name,
                    "target does not accept extensions"
                );
                Box::new(RejectingExtensionHandler::new(target_name))
            },
        }
    }
}

/// The production apply callback: fresh scope, resolved entry, then hand
/// the loaded extension to the target.
fn apply_into_target<'t>(target: &'t mut dyn ExtensibleTarget) -> ApplyResolutionFn<'t> {
    Box::new(move |resolution| {
        let loaded = load_resolution(resolution)?;
        let target_name = target.target_name().to_string();
        debug!(
            target: "gantry_extensions::handler",
            target = %target_name,
            extension_id = %loaded.id(),
            "applying extension"
        );
        target.apply_extension(loaded).map_err(|source| {
            Error::apply(target_name, resolution.entry_symbol(), source)
        })
    })
}

/// Handler for targets that accept extensions.
pub struct WorkingExtensionHandler<'t> {
    resolvers: Vec<Box<dyn ResolveExtension>>,
    apply: ApplyResolutionFn<'t>,
}

impl<'t> WorkingExtensionHandler<'t> {
    /// A handler with no resolvers; `apply` receives every resolution to
    /// consume.
    pub fn new(apply: ApplyResolutionFn<'t>) -> Self {
        Self {
            resolvers: Vec::new(),
            apply,
        }
    }

    pub fn push_resolver(&mut self, resolver: Box<dyn ResolveExtension>) {
        self.resolvers.push(resolver);
    }

    fn resolve(&self, id: &str) -> Result<ExtensionResolution> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            if let Some(resolution) = resolver.try_resolve(id) {
                debug!(
                    target: "gantry_extensions::handler",
                    extension_id = %id,
                    resolver_index = index,
                    entry_symbol = %resolution.entry_symbol(),
                    "extension resolved"
                );
                return Ok(resolution);
            }
        }
        Err(Error::unresolved(id))
    }
}

impl ExtensionHandler for WorkingExtensionHandler<'_> {
    fn apply(&mut self, id: &str) -> Result<()> {
        let resolution = self.resolve(id)?;
        self.apply_resolution(&resolution)?;
        info!(
            target: "gantry_extensions::handler",
            extension_id = %id,
            "extension applied"
        );
        Ok(())
    }

    fn apply_resolution(&mut self, resolution: &ExtensionResolution) -> Result<()> {
        (self.apply)(resolution)
    }

    fn add_resolver(&mut self, resolver: Box<dyn ResolveExtension>) -> Result<()> {
        self.push_resolver(resolver);
        Ok(())
    }
}

/// Handler for targets that opted out of extension support. Every mutating
/// call fails fast; no resolution or loading work is ever attempted.
pub struct RejectingExtensionHandler {
    target_name: String,
}

impl RejectingExtensionHandler {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
        }
    }

    fn reject<T>(&self) -> Result<T> {
        Err(Error::not_extensible(self.target_name.clone()))
    }
}

impl ExtensionHandler for RejectingExtensionHandler {
    fn apply(&mut self, _id: &str) -> Result<()> {
        self.reject()
    }

    fn apply_resolution(&mut self, _resolution: &ExtensionResolution) -> Result<()> {
        self.reject()
    }

    fn add_resolver(&mut self, _resolver: Box<dyn ResolveExtension>) -> Result<()> {
        self.reject()
    }
}

#[cfg(test)]
#[path = "tests/handler_tests.rs"]
mod tests;
