use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod auth;
mod config;
mod routes;

use adapters::PgClientRepository;
use clientele::{ClientMapper, ClientRepository, ClientService};
use config::ServerConfig;

/// Client service over whichever repository `main` wires in
pub type AppClientService = ClientService<dyn ClientRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<AppClientService>,
    pub config: Arc<ServerConfig>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Clientele API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router for a prepared state
pub fn app(state: AppState) -> Router {
    // Protected routes (require authentication when an API key is set)
    let protected_routes = routes::client::router().layer(middleware::from_fn_with_state(
        state.clone(),
        auth::auth_middleware,
    ));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Clientele API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;
    if config.api_key.is_some() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("No CLIENTELE_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Initialize application services
    let client_repo: Arc<dyn ClientRepository> = Arc::new(PgClientRepository::new(pool));
    let client_service = Arc::new(ClientService::new(client_repo, ClientMapper));

    let state = AppState {
        client_service,
        config: Arc::new(config),
    };

    let router = app(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Clientele API ready");

    Ok(router.into())
}
