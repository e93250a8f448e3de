//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod address;
mod page;

pub use address::*;
pub use page::*;
