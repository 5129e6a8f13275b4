// ============================================================================
// Portal Core - Sidebar
// File: crates/portal-core/src/services/sidebar.rs
// ============================================================================
//! Sidebar expansion state, activation handling and view model

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use portal_shared::utils::{is_segment_prefix, normalize_path};

use crate::domain::{IconId, NavItem, NavTree, Viewport};
use crate::error::DomainError;
use crate::services::active_path::resolve_active;

/// Per-section expanded flags. Lives in the rendering layer only, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    expanded: HashMap<String, bool>,
}

impl SidebarState {
    /// A section starts expanded when the current path lies under it.
    pub fn initial(tree: &NavTree, current: &str) -> Self {
        let current = normalize_path(current);
        let expanded = tree
            .sections()
            .map(|section| {
                (
                    section.path.clone(),
                    is_segment_prefix(&current, &section.path),
                )
            })
            .collect();
        Self { expanded }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.get(path).copied().unwrap_or(false)
    }

    /// Flip a section and return its new flag.
    pub fn toggle(&mut self, tree: &NavTree, path: &str) -> Result<bool, DomainError> {
        let item = tree
            .find(path)
            .ok_or_else(|| DomainError::UnknownNavItem(path.to_string()))?;
        if !item.is_section() {
            return Err(DomainError::NotASection(item.path.clone()));
        }
        let flag = self.expanded.entry(item.path.clone()).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }
}

/// Outcome of clicking a sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SidebarAction {
    Navigate { path: String, closes_overlay: bool },
    Toggle { path: String, expanded: bool },
}

/// Drives one rendered sidebar: leaves navigate, sections toggle.
pub struct SidebarController<'a> {
    tree: &'a NavTree,
    state: SidebarState,
    viewport: Viewport,
    on_close: Option<Box<dyn FnMut() + Send + 'a>>,
}

impl<'a> SidebarController<'a> {
    pub fn new(tree: &'a NavTree, current: &str, viewport: Viewport) -> Self {
        Self {
            tree,
            state: SidebarState::initial(tree, current),
            viewport,
            on_close: None,
        }
    }

    /// Called when a leaf is activated on a constrained viewport.
    pub fn on_close(mut self, callback: impl FnMut() + Send + 'a) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn activate(&mut self, path: &str) -> Result<SidebarAction, DomainError> {
        let item = self
            .tree
            .find(path)
            .ok_or_else(|| DomainError::UnknownNavItem(path.to_string()))?;

        if item.is_section() {
            let expanded = self.state.toggle(self.tree, &item.path)?;
            debug!(path = %item.path, expanded, "Sidebar section toggled");
            return Ok(SidebarAction::Toggle {
                path: item.path.clone(),
                expanded,
            });
        }

        let closes_overlay = self.viewport.is_constrained();
        if closes_overlay {
            if let Some(close) = self.on_close.as_mut() {
                close();
            }
        }
        Ok(SidebarAction::Navigate {
            path: item.path.clone(),
            closes_overlay,
        })
    }

    pub fn render(&self, current: &str) -> SidebarView {
        render(self.tree, &self.state, current)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarView {
    pub groups: Vec<SidebarGroupView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarGroupView {
    pub label: Option<String>,
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarEntry {
    pub title: String,
    pub path: String,
    pub icon: IconId,
    pub active: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_active_child: bool,
    /// `None` for plain links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarEntry>,
}

/// Grouped view of the tree for `current`. Only the most specific match is active.
pub fn render(tree: &NavTree, state: &SidebarState, current: &str) -> SidebarView {
    let active_path = resolve_active(tree, current).map(|item| item.path.as_str());

    let groups = tree
        .groups()
        .into_iter()
        .map(|group| SidebarGroupView {
            label: group.label.map(str::to_string),
            entries: group
                .items
                .into_iter()
                .map(|item| entry(item, state, active_path))
                .collect(),
        })
        .collect();

    SidebarView { groups }
}

fn entry(item: &NavItem, state: &SidebarState, active_path: Option<&str>) -> SidebarEntry {
    let children: Vec<SidebarEntry> = item
        .children
        .iter()
        .map(|child| entry(child, state, active_path))
        .collect();

    SidebarEntry {
        title: item.title.clone(),
        path: item.path.clone(),
        icon: item.icon,
        active: active_path == Some(item.path.as_str()),
        has_active_child: children.iter().any(|child| child.active),
        expanded: item.is_section().then(|| state.is_expanded(&item.path)),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::navigation::PortalNavigation;

    #[test]
    fn test_initial_expansion_follows_path() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Doctor);

        let state = SidebarState::initial(tree, "/doctor/statistics/trends");
        assert!(state.is_expanded("/doctor/statistics"));
        assert!(!state.is_expanded("/doctor/patients"));

        let state = SidebarState::initial(tree, "/doctor/statistics-other");
        assert!(!state.is_expanded("/doctor/statistics"));
    }

    #[test]
    fn test_section_toggles_instead_of_navigating() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Doctor);
        let mut controller = SidebarController::new(tree, "/doctor", Viewport::Desktop);

        let action = controller.activate("/doctor/patients").unwrap();
        assert_eq!(
            action,
            SidebarAction::Toggle { path: "/doctor/patients".into(), expanded: true }
        );
        let action = controller.activate("/doctor/patients").unwrap();
        assert_eq!(
            action,
            SidebarAction::Toggle { path: "/doctor/patients".into(), expanded: false }
        );
    }

    #[test]
    fn test_leaf_closes_overlay_on_mobile_only() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Patient);
        let mut closed = 0;

        {
            let mut controller = SidebarController::new(tree, "/dashboard", Viewport::Mobile)
                .on_close(|| closed += 1);
            let action = controller.activate("/dashboard/orders").unwrap();
            assert_eq!(
                action,
                SidebarAction::Navigate { path: "/dashboard/orders".into(), closes_overlay: true }
            );
        }
        assert_eq!(closed, 1);

        let mut desktop_closed = 0;
        {
            let mut controller = SidebarController::new(tree, "/dashboard", Viewport::Desktop)
                .on_close(|| desktop_closed += 1);
            controller.activate("/dashboard/orders").unwrap();
        }
        assert_eq!(desktop_closed, 0);
    }

    #[test]
    fn test_unknown_item_and_leaf_toggle_rejected() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Admin);
        let mut controller = SidebarController::new(tree, "/saas-admin", Viewport::Desktop);
        assert!(matches!(
            controller.activate("/saas-admin/nowhere"),
            Err(DomainError::UnknownNavItem(_))
        ));

        let mut state = SidebarState::default();
        assert!(matches!(
            state.toggle(tree, "/saas-admin/users"),
            Err(DomainError::NotASection(_))
        ));
    }

    #[test]
    fn test_render_marks_single_active_entry() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Doctor);
        let current = "/doctor/statistics/trends";
        let view = render(tree, &SidebarState::initial(tree, current), current);

        let entries: Vec<&SidebarEntry> = view
            .groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .collect();
        let statistics = entries.iter().find(|e| e.path == "/doctor/statistics").unwrap();

        assert!(!statistics.active);
        assert!(statistics.has_active_child);
        assert_eq!(statistics.expanded, Some(true));
        assert!(statistics.children.iter().filter(|c| c.active).count() == 1);

        let active_count: usize = entries
            .iter()
            .map(|e| usize::from(e.active) + e.children.iter().filter(|c| c.active).count())
            .sum();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_render_groups_in_first_appearance_order() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Admin);
        let view = render(tree, &SidebarState::default(), "/saas-admin");

        let labels: Vec<Option<&str>> = view.groups.iter().map(|g| g.label.as_deref()).collect();
        assert_eq!(labels, vec![None, Some("运营"), Some("系统")]);
    }
}
