//! Portal page routes. Every page is rendered inside its role's shell,
//! except the doctor login page which uses the bare auth layout.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, Uri},
    Json,
};
use serde::Serialize;

use portal_core::domain::{IconId, Role};
use portal_core::services::{AuthStatus, LayoutShell, ShellFrame, SidebarState};
use portal_shared::utils::{is_segment_prefix, normalize_path};

use crate::error::ApiError;
use crate::handlers::navigation::PathQuery;
use crate::icons;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Portal,
    Login,
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub path: String,
    pub role: Role,
    pub kind: PageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<ShellFrame>,
    pub icons: BTreeMap<IconId, &'static str>,
}

fn role_for_path(path: &str) -> Option<Role> {
    Role::ALL
        .into_iter()
        .find(|role| is_segment_prefix(path, role.prefix()))
}

/// Page handler - GET /dashboard/.., /doctor/.., /saas-admin/..
pub async fn page(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PathQuery>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<PageResponse>>, ApiError> {
    let path = normalize_path(uri.path());
    let role = role_for_path(&path)
        .ok_or_else(|| ApiError::NotFound(format!("No portal serves {}", path)))?;
    let tree = state.navigation.tree(role);
    let store = state.client_store(&headers);

    let auth = if role.requires_auth() {
        Some(state.doctor_session(&store).await.status())
    } else {
        None
    };

    if role.requires_auth() && path == state.gate_rules.login_path {
        return Ok(Json(ApiResponse::ok(PageResponse {
            path,
            role,
            kind: PageKind::Login,
            auth,
            frame: None,
            icons: BTreeMap::new(),
        })));
    }

    let shell = LayoutShell::mount(role, query.viewport, store.store()).await;
    let frame = shell.frame(tree, &SidebarState::initial(tree, &path), &path);

    Ok(Json(ApiResponse::ok(PageResponse {
        path,
        role,
        kind: PageKind::Portal,
        auth,
        frame: Some(frame),
        icons: icons::table_for(tree),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_path() {
        assert_eq!(role_for_path("/doctor/patients"), Some(Role::Doctor));
        assert_eq!(role_for_path("/dashboard"), Some(Role::Patient));
        assert_eq!(role_for_path("/saas-admin/tenants/list"), Some(Role::Admin));
        assert_eq!(role_for_path("/doctorate"), None);
    }
}
