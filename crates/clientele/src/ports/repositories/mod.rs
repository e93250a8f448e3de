//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod client_repository;

pub use client_repository::*;
