pub mod config;
pub mod errors;
pub mod handlers;
pub mod password;
pub mod request_id;
pub mod schema;
pub mod seeder;
pub mod store;

use axum::{
    Extension, Router,
    http::{HeaderValue, header},
    middleware,
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    errors::ErrorResponse,
    handlers::{SeedResponse, health_check, not_found, seed_database},
    request_id::request_id_middleware,
    seeder::Seeder,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Dashboard seeding API"),
    paths(handlers::seed_database, handlers::health_check),
    components(schemas(SeedResponse, ErrorResponse)),
    tags(
        (name = "seed", description = "Database seeding"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn create_router(seeder: Seeder) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/seed", get(seed_database))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(Extension(seeder))
        .layer(middleware::from_fn(request_id_middleware))
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let port = config.port;
    let app = create_router(Seeder::from_config(&config));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
