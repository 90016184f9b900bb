//! Logical pins
//!
//! Descriptor types and the registry that resolves pin ids to them.

pub mod descriptor;
pub mod registry;

pub use descriptor::*;
pub use registry::{Registry, RegistryError, MAX_PINS};
