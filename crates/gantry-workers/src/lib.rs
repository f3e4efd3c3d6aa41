//! Coordination primitives between a build coordinator and its workers:
//! rendezvous lifecycle channels, a last-write-wins outcome cell, and a
//! thread harness wiring the two together.

mod error;
mod lifecycle;
mod protocol;
mod result_cell;
mod worker;

pub use error::*;
pub use lifecycle::*;
pub use protocol::*;
pub use result_cell::*;
pub use worker::*;
