//! Client - Managed business entity
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Address;

/// Client - identity, contact data and postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Client {
    /// Assigned by the backend on first save, `None` before that
    pub id: Option<i64>,
    /// Unique across all clients (case-sensitive)
    pub name: String,
    pub mail: String,
    pub address: Address,
}

impl Client {
    /// Create a client that has not been persisted yet
    pub fn new(name: String, mail: String, address: Address) -> Self {
        Self {
            id: None,
            name,
            mail,
            address,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
