//! HTTP request handlers.

use axum::{Extension, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{errors::AppError, seeder::Seeder};

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
}

/// Create the dashboard tables and insert the placeholder data.
#[utoipa::path(
    get,
    path = "/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Database seeded", body = SeedResponse),
        (status = 500, description = "Seeding failed; nothing was committed", body = crate::errors::ErrorResponse)
    )
)]
pub async fn seed_database(
    Extension(seeder): Extension<Seeder>,
) -> Result<Json<SeedResponse>, AppError> {
    let report = seeder.seed().await?;

    tracing::info!(
        users = report.users,
        customers = report.customers,
        invoices = report.invoices,
        revenue = report.revenue,
        "Database seeded"
    );

    Ok(Json(SeedResponse {
        message: "Database seeded successfully".to_string(),
    }))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
