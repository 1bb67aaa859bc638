//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so
//! every failure leaves the API as a structured `{"error": ...}` body,
//! never a bare framework fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use courtbook_core::errors::CourtError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `CourtError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub CourtError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            CourtError::NotFound(_) => StatusCode::NOT_FOUND,
            CourtError::Validation(_) => StatusCode::BAD_REQUEST,
            CourtError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CourtError::Conflict(_) => StatusCode::CONFLICT,
            CourtError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CourtError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, CourtError>` inside
/// handlers that return `Result<T, AppError>`.
impl From<CourtError> for AppError {
    fn from(err: CourtError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on repository functions returning `Result<T, eyre::Report>`;
/// the report is wrapped as a database error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CourtError::Database(err))
    }
}
