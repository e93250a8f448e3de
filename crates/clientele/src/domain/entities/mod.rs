//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Client: managed business entity with an embedded Address

mod client;

pub use client::*;
