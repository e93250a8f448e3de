//! Client request/response DTOs and request validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("valid regex")
});

static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{3}$").expect("valid regex"));

/// Create (and full-replace edit) request with flat address fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientCreateRequest {
    pub name: String,
    pub mail: String,
    #[serde(default)]
    pub street: Option<String>,
    pub building_number: i32,
    #[serde(default)]
    pub apartment_number: Option<i32>,
    pub city: String,
    pub postal_code: String,
}

/// Abbreviated client view: id, name, mail and city only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    pub id: Option<i64>,
    pub name: String,
    pub mail: String,
    pub city: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check a client name on its own (used by rename)
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if is_blank(name) {
        return Err(DomainError::validation("name", "Name cannot be blank"));
    }
    Ok(())
}

pub fn is_valid_mail(mail: &str) -> bool {
    EMAIL.is_match(mail)
}

pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE.is_match(postal_code)
}

impl ClientCreateRequest {
    /// Validate every field, reporting the first violation.
    ///
    /// Order: name, mail, city, postal code. `street` and `apartment_number`
    /// are optional; `building_number` is enforced by the type.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;

        if is_blank(&self.mail) {
            return Err(DomainError::validation("mail", "Mail cannot be blank"));
        }
        if !is_valid_mail(&self.mail) {
            return Err(DomainError::validation("mail", "Invalid email address"));
        }

        if is_blank(&self.city) {
            return Err(DomainError::validation("city", "City cannot be blank"));
        }

        if is_blank(&self.postal_code) {
            return Err(DomainError::validation(
                "postal_code",
                "Postal code cannot be blank",
            ));
        }
        if !is_valid_postal_code(&self.postal_code) {
            return Err(DomainError::validation(
                "postal_code",
                "Invalid postal code. Postal code must be in format \"dd-ddd\", where \"d\" is a digit",
            ));
        }

        Ok(())
    }
}
