use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::seeder::SeedError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Seeding failed: {0}")]
    Seed(#[from] SeedError),

    #[error("Not found")]
    NotFound,
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Seed(e) => {
                error!(error = ?e, "Seeding error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to seed database")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_errors_map_to_generic_500() {
        let errors = [
            SeedError::Connect(sqlx::Error::PoolTimedOut),
            SeedError::Schema(sqlx::Error::RowNotFound),
            SeedError::Commit(sqlx::Error::WorkerCrashed),
        ];

        for err in errors {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_not_found() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
