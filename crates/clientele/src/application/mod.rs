//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and wire-facing models.

mod client_mapper;
mod client_service;

pub use client_mapper::ClientMapper;
pub use client_service::ClientService;
