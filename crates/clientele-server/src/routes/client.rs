//! Client Routes - Client Management
//!
//! HTTP handlers that delegate to ClientService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use clientele::{
    Client, ClientCreateRequest, ClientPage, ClientResponsePage, DomainError, PageRequest, Sort,
};

use crate::AppState;

/// Error body returned by every failing client endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Map domain errors onto HTTP status codes
fn api_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::DuplicateName(_) => StatusCode::CONFLICT,
        DomainError::ValidationFailed { .. } | DomainError::InvalidPagination(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Repository(_) => {
            tracing::error!("Client repository failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}

/// Undecodable bodies (missing or mistyped fields) are validation failures
fn body_error(rejection: JsonRejection) -> ApiError {
    api_error(DomainError::validation("body", rejection.body_text()))
}

/// Paging query: `page` is zero-based, `sort` is `field[,asc|desc]`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameParams {
    /// Missing counts as blank and fails name validation
    #[serde(default)]
    pub name: String,
}

/// List all clients
#[utoipa::path(
    get,
    path = "/api/client/all",
    responses(
        (status = 200, description = "List of all clients", body = Vec<Client>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.client_service.get_all().await.map_err(api_error)?;
    Ok(Json(clients))
}

/// Page of full client records
#[utoipa::path(
    get,
    path = "/api/client/page",
    params(PageParams),
    responses(
        (status = 200, description = "Page of clients", body = ClientPage),
        (status = 400, description = "Invalid pagination", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn page_clients(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ClientPage>, ApiError> {
    let mut request = PageRequest::new(
        params.page.unwrap_or(0),
        params.size.unwrap_or(state.config.default_page_size),
    )
    .map_err(api_error)?;

    if let Some(sort) = params.sort.as_deref() {
        request = request.with_sort(sort.parse::<Sort>().map_err(api_error)?);
    }

    let page = state
        .client_service
        .get_page_sorted(&request)
        .await
        .map_err(api_error)?;

    Ok(Json(page))
}

/// Page of abbreviated client data
#[utoipa::path(
    get,
    path = "/api/client/abbreviated",
    params(PageParams),
    responses(
        (status = 200, description = "Page of abbreviated clients", body = ClientResponsePage),
        (status = 400, description = "Invalid pagination", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn page_abbreviated(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ClientResponsePage>, ApiError> {
    let page = state
        .client_service
        .get_all_abbreviated(
            params.page.unwrap_or(0),
            params.size.unwrap_or(state.config.default_page_size),
        )
        .await
        .map_err(api_error)?;

    Ok(Json(page))
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/api/client/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = Client),
        (status = 404, description = "Client not found", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Client>, ApiError> {
    let client = state.client_service.get(id).await.map_err(api_error)?;
    Ok(Json(client))
}

/// Create new client
#[utoipa::path(
    post,
    path = "/api/client",
    request_body = ClientCreateRequest,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 409, description = "Name already taken", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let Json(payload) = payload.map_err(body_error)?;
    let client = state
        .client_service
        .create(payload)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// Replace client data
#[utoipa::path(
    put,
    path = "/api/client/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    request_body = ClientCreateRequest,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 409, description = "Name already taken", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ClientCreateRequest>, JsonRejection>,
) -> Result<Json<Client>, ApiError> {
    let Json(payload) = payload.map_err(body_error)?;
    let client = state
        .client_service
        .edit(payload, id)
        .await
        .map_err(api_error)?;

    Ok(Json(client))
}

/// Rename client
#[utoipa::path(
    patch,
    path = "/api/client/{id}/name",
    params(
        ("id" = i64, Path, description = "Client ID"),
        NameParams
    ),
    responses(
        (status = 200, description = "Client renamed", body = Client),
        (status = 400, description = "Blank name", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 409, description = "Name already taken", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn rename_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<NameParams>,
) -> Result<Json<Client>, ApiError> {
    let client = state
        .client_service
        .update_name(params.name, id)
        .await
        .map_err(api_error)?;

    Ok(Json(client))
}

/// Delete client
#[utoipa::path(
    delete,
    path = "/api/client/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ErrorBody)
    ),
    tag = "Client"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.client_service.delete(id).await.map_err(api_error)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Client deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/client", post(create_client))
        .route("/api/client/all", get(list_clients))
        .route("/api/client/page", get(page_clients))
        .route("/api/client/abbreviated", get(page_abbreviated))
        .route(
            "/api/client/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/api/client/:id/name", patch(rename_client))
}
