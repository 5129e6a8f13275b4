//! Doctor portal redirect gate

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use portal_core::services::GateDecision;

use crate::state::AppState;

/// Redirects doctor page requests according to the persisted auth flag.
pub async fn doctor_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let store = state.client_store(request.headers());
    let session = state.doctor_session(&store).await;
    let path = request.uri().path().to_string();

    match session.decide(&path) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Redirect(location) => {
            debug!(from = %path, to = %location, status = ?session.status(), "Auth gate redirect");
            Redirect::temporary(&location).into_response()
        }
        // The flag is loaded before deciding, so this only means the session was never mounted.
        GateDecision::Pending => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
