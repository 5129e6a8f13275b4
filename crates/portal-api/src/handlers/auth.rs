// ============================================================================
// Portal API - Doctor Auth Handlers
// File: crates/portal-api/src/handlers/auth.rs
// ============================================================================
//! Mock doctor login/logout. No credential check: the flag is a redirect gate only.

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use portal_core::services::AuthStatus;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthStateResponse {
    pub status: AuthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Auth status handler - GET /api/v1/doctor/auth/status
pub async fn status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiResponse<AuthStateResponse>> {
    let session = state.doctor_session(&state.client_store(&headers)).await;
    Json(ApiResponse::ok(AuthStateResponse {
        status: session.status(),
        redirect: None,
    }))
}

/// Login handler - POST /api/v1/doctor/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Response, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let store = state.client_store(&headers);
    let mut session = state.doctor_session(&store).await;
    let redirect = session.login_doctor().await;
    info!(status = ?session.status(), "Doctor login handled");

    let mut response = Json(ApiResponse::ok(AuthStateResponse {
        status: session.status(),
        redirect: Some(redirect),
    }))
    .into_response();
    store.apply(&mut response);
    Ok(response)
}

/// Logout handler - POST /api/v1/doctor/auth/logout
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let store = state.client_store(&headers);
    let mut session = state.doctor_session(&store).await;
    let redirect = session.logout_doctor().await;

    let mut response = Json(ApiResponse::ok(AuthStateResponse {
        status: session.status(),
        redirect: Some(redirect),
    }))
    .into_response();
    store.apply(&mut response);
    response
}
