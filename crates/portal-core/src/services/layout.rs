// ============================================================================
// Portal Core - Layout Shell
// File: crates/portal-core/src/services/layout.rs
// ============================================================================
//! Header + sidebar frame around page content, with the persisted
//! sidebar-open preference

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use portal_shared::utils::parse_flag;

use crate::domain::{NavTree, Role, Viewport};
use crate::repositories::ClientStateStore;
use crate::services::active_path::breadcrumbs;
use crate::error::DomainError;
use crate::services::sidebar::{render, SidebarAction, SidebarController, SidebarState, SidebarView};

/// Events that move the sidebar between open and closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "open", rename_all = "snake_case")]
pub enum LayoutEvent {
    ToggleButton,
    BackdropClick,
    LinkClick,
    PreferenceChanged(bool),
}

pub struct LayoutShell<S: ClientStateStore + ?Sized> {
    role: Role,
    viewport: Viewport,
    open: bool,
    store: Arc<S>,
}

impl<S: ClientStateStore + ?Sized> LayoutShell<S> {
    /// Reads the persisted preference once. Missing or unreadable means closed.
    pub async fn mount(role: Role, viewport: Viewport, store: Arc<S>) -> Self {
        let open = match store.get(role.sidebar_cookie()).await {
            Ok(Some(value)) => parse_flag(&value),
            Ok(None) => false,
            Err(e) => {
                warn!(role = %role, "Sidebar preference unreadable, defaulting to closed: {}", e);
                false
            }
        };
        debug!(role = %role, open, "Layout shell mounted");
        Self { role, viewport, open, store }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Apply an event and return the resulting open flag.
    pub async fn handle(&mut self, event: LayoutEvent) -> bool {
        match event {
            LayoutEvent::ToggleButton => {
                self.open = !self.open;
                self.persist().await;
            }
            LayoutEvent::PreferenceChanged(open) => {
                self.open = open;
                self.persist().await;
            }
            // Overlay dismissals; the desktop sidebar has no overlay.
            LayoutEvent::BackdropClick | LayoutEvent::LinkClick => {
                if self.viewport.is_constrained() {
                    self.open = false;
                }
            }
        }
        self.open
    }

    /// Sidebar controller for this shell's viewport.
    pub fn sidebar<'a>(&self, tree: &'a NavTree, current: &str) -> SidebarController<'a> {
        SidebarController::new(tree, current, self.viewport)
    }

    /// Click on a sidebar entry. A leaf that dismisses the overlay counts as a
    /// link click on the shell; sections only toggle.
    pub async fn activate(
        &mut self,
        sidebar: &mut SidebarController<'_>,
        path: &str,
    ) -> Result<SidebarAction, DomainError> {
        let action = sidebar.activate(path)?;
        if let SidebarAction::Navigate { closes_overlay: true, .. } = action {
            self.handle(LayoutEvent::LinkClick).await;
        }
        Ok(action)
    }

    async fn persist(&self) {
        let value = if self.open { "true" } else { "false" };
        if let Err(e) = self.store.set(self.role.sidebar_cookie(), value).await {
            warn!(role = %self.role, "Failed to persist sidebar preference: {}", e);
        }
    }

    pub fn frame(&self, tree: &NavTree, sidebar: &SidebarState, current: &str) -> ShellFrame {
        let trail = breadcrumbs(tree, current);
        let page_title = trail.last().map(|item| item.title.clone());

        ShellFrame {
            role: self.role,
            header: HeaderView {
                logo: self.role.display_name().to_string(),
                show_menu_toggle: self.viewport.is_constrained(),
                page_title,
                breadcrumbs: trail
                    .iter()
                    .map(|item| Breadcrumb {
                        title: item.title.clone(),
                        path: item.path.clone(),
                    })
                    .collect(),
                user_menu: true,
                notifications: true,
            },
            sidebar: render(tree, sidebar, current),
            sidebar_open: self.open,
            overlay: self.open && self.viewport.is_constrained(),
            reserve_sidebar_width: self.open && !self.viewport.is_constrained(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellFrame {
    pub role: Role,
    pub header: HeaderView,
    pub sidebar: SidebarView,
    pub sidebar_open: bool,
    /// Sidebar drawn over content with a dismissable backdrop
    pub overlay: bool,
    /// Content padding reserved for a persistent sidebar
    pub reserve_sidebar_width: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub logo: String,
    pub show_menu_toggle: bool,
    pub page_title: Option<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub user_menu: bool,
    pub notifications: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Breadcrumb {
    pub title: String,
    pub path: String,
}
