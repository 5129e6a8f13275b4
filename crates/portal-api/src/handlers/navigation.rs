// ============================================================================
// Portal API - Navigation & Layout Handlers
// File: crates/portal-api/src/handlers/navigation.rs
// ============================================================================

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use portal_core::domain::{IconId, Viewport};
use portal_core::services::sidebar::render;
use portal_core::services::{
    LayoutEvent, LayoutShell, ShellFrame, SidebarAction, SidebarState, SidebarView,
};
use portal_shared::utils::normalize_path;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::handlers::parse_role;
use crate::icons;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: Option<String>,
    #[serde(default)]
    pub viewport: Viewport,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub path: String,
    pub sidebar: SidebarView,
    pub icons: BTreeMap<IconId, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct ShellResponse {
    pub path: String,
    pub frame: ShellFrame,
    pub icons: BTreeMap<IconId, &'static str>,
}

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub event: LayoutEvent,
    #[serde(default)]
    pub viewport: Viewport,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub sidebar_open: bool,
}

#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    /// Entry that was clicked
    pub path: String,
    /// Page the sidebar was rendered for; defaults to the portal root
    pub current: Option<String>,
    #[serde(default)]
    pub viewport: Viewport,
}

#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    pub action: SidebarAction,
    pub sidebar_open: bool,
    pub sidebar: SidebarView,
}

/// Sidebar view - GET /api/v1/portals/{role}/navigation
pub async fn navigation(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Query(query): Query<PathQuery>,
) -> Result<Json<ApiResponse<NavigationResponse>>, ApiError> {
    let role = parse_role(&role)?;
    let tree = state.navigation.tree(role);
    let path = normalize_path(query.path.as_deref().unwrap_or(role.root_path()));

    let sidebar = render(tree, &SidebarState::initial(tree, &path), &path);

    Ok(Json(ApiResponse::ok(NavigationResponse {
        path,
        sidebar,
        icons: icons::table_for(tree),
    })))
}

/// Full layout frame - GET /api/v1/portals/{role}/shell
pub async fn shell(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Query(query): Query<PathQuery>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<ShellResponse>>, ApiError> {
    let role = parse_role(&role)?;
    let tree = state.navigation.tree(role);
    let path = normalize_path(query.path.as_deref().unwrap_or(role.root_path()));

    let store = state.client_store(&headers);
    let shell = LayoutShell::mount(role, query.viewport, store.store()).await;
    let frame = shell.frame(tree, &SidebarState::initial(tree, &path), &path);

    Ok(Json(ApiResponse::ok(ShellResponse {
        path,
        frame,
        icons: icons::table_for(tree),
    })))
}

/// Sidebar open/close event - POST /api/v1/portals/{role}/layout
pub async fn layout_event(
    State(state): State<AppState>,
    Path(role): Path<String>,
    headers: HeaderMap,
    AppJson(payload): AppJson<LayoutRequest>,
) -> Result<Response, ApiError> {
    let role = parse_role(&role)?;

    let store = state.client_store(&headers);
    let mut shell = LayoutShell::mount(role, payload.viewport, store.store()).await;
    let sidebar_open = shell.handle(payload.event).await;
    debug!(role = %role, event = ?payload.event, sidebar_open, "Layout event handled");

    let mut response = Json(ApiResponse::ok(LayoutResponse { sidebar_open })).into_response();
    store.apply(&mut response);
    Ok(response)
}

/// Sidebar entry click - POST /api/v1/portals/{role}/sidebar/activate
pub async fn activate(
    State(state): State<AppState>,
    Path(role): Path<String>,
    headers: HeaderMap,
    AppJson(payload): AppJson<ActivateRequest>,
) -> Result<Response, ApiError> {
    let role = parse_role(&role)?;
    let tree = state.navigation.tree(role);
    let current = normalize_path(payload.current.as_deref().unwrap_or(role.root_path()));

    let store = state.client_store(&headers);
    let mut shell = LayoutShell::mount(role, payload.viewport, store.store()).await;
    let mut sidebar = shell.sidebar(tree, &current);
    let action = shell.activate(&mut sidebar, &payload.path).await?;

    let shown = match &action {
        SidebarAction::Navigate { path, .. } => path.as_str(),
        SidebarAction::Toggle { .. } => current.as_str(),
    };
    let view = sidebar.render(shown);
    debug!(role = %role, ?action, sidebar_open = shell.is_open(), "Sidebar entry activated");

    let mut response = Json(ApiResponse::ok(ActivateResponse {
        sidebar_open: shell.is_open(),
        sidebar: view,
        action,
    }))
    .into_response();
    store.apply(&mut response);
    Ok(response)
}
