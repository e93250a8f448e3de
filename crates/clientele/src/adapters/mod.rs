//! In-process Adapters
//!
//! Port implementations that need no external infrastructure.

mod memory;

pub use memory::InMemoryClientRepository;
