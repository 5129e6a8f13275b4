use axum::{extract::State, Json};
use serde::Serialize;

use portal_core::domain::Role;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub portals: Vec<PortalHealth>,
}

/// Loaded navigation of one portal
#[derive(Debug, Serialize)]
pub struct PortalHealth {
    pub role: Role,
    pub prefix: &'static str,
    pub nav_items: usize,
    pub sections: usize,
}

/// Liveness - GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let portals = Role::ALL
        .into_iter()
        .map(|role| {
            let tree = state.navigation.tree(role);
            PortalHealth {
                role,
                prefix: role.prefix(),
                nav_items: tree.flatten().len(),
                sections: tree.sections().count(),
            }
        })
        .collect();

    Json(ApiResponse::ok(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        portals,
    }))
}
