//! Clientele API Routes
//!
//! - /api/client - Client management
//! - /swagger-ui - OpenAPI documentation

pub mod client;
pub mod swagger;
