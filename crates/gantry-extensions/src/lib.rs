//! Dynamic extension loading for gantry configuration targets.
//!
//! Extensions are native artifacts exporting the entry symbol of
//! `gantry-extension-api`. An [`ExtensionRegistry`] maps extension ids to
//! [`ExtensionResolution`]s (entry symbol + ordered artifacts), resolvers
//! turn ids into resolutions, and a per-target [`ExtensionHandler`] loads
//! each resolution into a fresh [`ExtensionScope`] and applies the result
//! to the target.

mod error;
mod handler;
mod registry;
mod resolution;
mod resolver;
mod scope;
mod target;
mod util;

pub use error::*;
pub use handler::*;
pub use registry::*;
pub use resolution::*;
pub use resolver::*;
pub use scope::*;
pub use target::*;
