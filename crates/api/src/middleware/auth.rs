//! # Authentication Module
//!
//! Resolves the acting user for protected endpoints. Identity issuance is
//! external to this backend; requests present an opaque API token in the
//! `Authorization` header and the extractor resolves it against the users
//! table.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use courtbook_core::errors::CourtError;
use courtbook_db::models::DbUser;

use crate::{middleware::error_handling::AppError, ApiState};

/// The authenticated user behind a request, extracted from
/// `Authorization: Bearer <token>`.
///
/// Handlers that require authentication take this as an argument; requests
/// without a resolvable token are rejected with 401 before the handler runs.
pub struct AuthUser(pub DbUser);

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError(CourtError::Authentication(
                    "Missing authorization header".to_string(),
                ))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError(CourtError::Authentication(
                "Expected a bearer token".to_string(),
            ))
        })?;

        let user = courtbook_db::repositories::user::get_user_by_token(&state.db_pool, token)
            .await
            .map_err(CourtError::Database)?
            .ok_or_else(|| {
                AppError(CourtError::Authentication("Invalid API token".to_string()))
            })?;

        Ok(AuthUser(user))
    }
}
