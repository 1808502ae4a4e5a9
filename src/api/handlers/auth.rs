//! Registration and login handlers.

use crate::api::dto::{MessageResponse, TokenResponse};
use crate::api::error::ApiErrorResponse;
use crate::api::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

/// `POST /auth/register` - register a new user.
///
/// # Errors
///
/// Returns 400 when email or password is missing, the email is malformed,
/// or the address is already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiErrorResponse> {
    let (email, password) = credentials_from(&body)?;
    state.auth.register(email, password).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("user registered successfully")),
    ))
}

/// `POST /auth/login` - verify credentials and issue a session token.
///
/// # Errors
///
/// Returns 400 when fields are missing or the credentials do not match a
/// registered user; unknown email and wrong password are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<TokenResponse>, ApiErrorResponse> {
    let (email, password) = credentials_from(&body)?;
    let token = state.auth.login(email, password).await?;
    Ok(Json(TokenResponse { token }))
}

/// Pulls both credential fields out of the request body, rejecting requests
/// where either is missing or not a string.
fn credentials_from(body: &Value) -> Result<(&str, &str), ApiErrorResponse> {
    match (
        body.get("email").and_then(Value::as_str),
        body.get("password").and_then(Value::as_str),
    ) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(ApiErrorResponse::bad_request(
            "email and password are required",
        )),
    }
}
