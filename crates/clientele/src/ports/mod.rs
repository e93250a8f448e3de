//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! interacts with external systems.
//!
//! Implementations of these traits live in the adapter layers.

pub mod repositories;

// Re-exports
pub use repositories::*;
