//! Clientele Data Models
//!
//! Wire-facing request and response shapes, including the page envelope.

mod client;
mod page;

pub use client::*;
pub use page::*;
