//! Bearer token extractor gating the task routes.

use crate::api::error::ApiErrorResponse;
use crate::api::state::AppState;
use crate::auth::domain::UserId;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

/// Authenticated caller identity, extracted from the `Authorization` header.
///
/// Requests lacking a valid bearer token are rejected with 401 before any
/// handler code runs.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiErrorResponse::unauthorized("missing bearer token"))?;
        let owner = state
            .auth
            .verify_token(token)
            .map_err(|_| ApiErrorResponse::unauthorized("invalid or expired token"))?;
        Ok(Self(owner))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
