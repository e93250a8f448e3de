//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use clientele::{
    Address, Client, ClientCreateRequest, ClientPage, ClientResponse, ClientResponsePage,
};

use super::client::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::client::list_clients,
        super::client::page_clients,
        super::client::page_abbreviated,
        super::client::get_client,
        super::client::create_client,
        super::client::update_client,
        super::client::rename_client,
        super::client::delete_client,
    ),
    info(
        title = "Clientele API",
        version = "0.1.0",
        description = "Client management API: CRUD, paging and unique client names",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Client", description = "Client management"),
    ),
    components(
        schemas(
            Address,
            Client,
            ClientCreateRequest,
            ClientResponse,
            ClientPage,
            ClientResponsePage,
            ErrorBody,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_client_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/client/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/client/page"));
    }
}
