//! Client Mapper
//!
//! Stateless translation between the Client entity and its wire DTOs.

use crate::domain::{Address, Client};
use crate::models::{ClientCreateRequest, ClientResponse};

/// Converts between `Client` and its request/response shapes
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientMapper;

impl ClientMapper {
    /// Abbreviated view; only the city of the address is exposed
    pub fn to_response(&self, client: &Client) -> ClientResponse {
        ClientResponse {
            id: client.id,
            name: client.name.clone(),
            mail: client.mail.clone(),
            city: client.address.city.clone(),
        }
    }

    /// Build a new, not yet persisted client from a create request
    pub fn to_entity(&self, request: ClientCreateRequest) -> Client {
        Client::new(
            request.name,
            request.mail,
            Address {
                street: request.street,
                building_number: request.building_number,
                apartment_number: request.apartment_number,
                city: request.city,
                postal_code: request.postal_code,
            },
        )
    }

    /// Overwrite every mutable field of `client` from `request`.
    ///
    /// Optional address fields missing from the request are cleared.
    pub fn apply(&self, request: ClientCreateRequest, client: &mut Client) {
        client.name = request.name;
        client.mail = request.mail;
        client.address = Address {
            street: request.street,
            building_number: request.building_number,
            apartment_number: request.apartment_number,
            city: request.city,
            postal_code: request.postal_code,
        };
    }
}
