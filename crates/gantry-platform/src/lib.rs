//! Target platforms a build can select, and the container that resolves
//! requested platform names against them.

mod error;
mod platform;

pub use error::*;
pub use platform::*;
