//! Clientele Domain Library
//!
//! Core domain types, ports and use cases for client management.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Client)
//!   - `value_objects/`: Immutable value types (Address, PageRequest, Sort)
//!   - `errors/`: Domain-specific error types
//!
//! - **Models** (`models/`): Wire-facing request/response shapes and `Page`
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! - **Application** (`application/`): Use cases (ClientService, ClientMapper)
//!
//! - **Adapters** (`adapters/`): In-process port implementations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clientele::{ClientMapper, ClientService, InMemoryClientRepository};
//!
//! let service = ClientService::new(Arc::new(InMemoryClientRepository::new()), ClientMapper);
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod models;
pub mod ports;

// Re-export commonly used types
pub use adapters::InMemoryClientRepository;
pub use application::{ClientMapper, ClientService};
pub use domain::{Address, Client, DomainError, PageRequest, Sort, SortDirection, SortField};
pub use models::{ClientCreateRequest, ClientPage, ClientResponse, ClientResponsePage, Page};
pub use ports::ClientRepository;
