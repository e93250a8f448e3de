//! Address - Postal address embedded in a Client

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Postal address, owned by exactly one Client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: Option<String>,
    pub building_number: i32,
    pub apartment_number: Option<i32>,
    pub city: String,
    /// Format `dd-ddd`, e.g. "01-222"
    pub postal_code: String,
}
