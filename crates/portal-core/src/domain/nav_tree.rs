// ============================================================================
// Portal Core - Navigation Tree
// File: crates/portal-core/src/domain/nav_tree.rs
// Description: Validated, immutable navigation tree of one role portal
// ============================================================================

use std::collections::HashSet;

use portal_shared::constants::MAX_NAV_DEPTH;
use portal_shared::utils::{is_segment_prefix, normalize_path};

use super::{NavItem, Role};
use crate::error::DomainError;

/// Navigation tree of one role. Construction validates the whole tree.
#[derive(Debug, Clone)]
pub struct NavTree {
    role: Role,
    items: Vec<NavItem>,
}

/// Top-level items sharing a group label, in order of first appearance.
#[derive(Debug, Clone)]
pub struct NavGroup<'a> {
    pub label: Option<&'a str>,
    pub items: Vec<&'a NavItem>,
}

impl NavTree {
    pub fn new(role: Role, items: Vec<NavItem>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for item in &items {
            validate_item(role, item, 1, &mut seen)?;
        }
        Ok(Self { role, items })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Parents followed by their children, in tree order.
    pub fn flatten(&self) -> Vec<&NavItem> {
        let mut out = Vec::new();
        for item in &self.items {
            out.push(item);
            out.extend(item.children.iter());
        }
        out
    }

    pub fn find(&self, path: &str) -> Option<&NavItem> {
        let path = normalize_path(path);
        self.flatten().into_iter().find(|item| item.path == path)
    }

    /// Parent of a child item, `None` for top-level or unknown paths.
    pub fn parent_of(&self, path: &str) -> Option<&NavItem> {
        self.items
            .iter()
            .find(|item| item.children.iter().any(|child| child.path == path))
    }

    pub fn sections(&self) -> impl Iterator<Item = &NavItem> {
        self.items.iter().filter(|item| item.is_section())
    }

    pub fn groups(&self) -> Vec<NavGroup<'_>> {
        let mut groups: Vec<NavGroup<'_>> = Vec::new();
        for item in &self.items {
            let label = item.group.as_deref();
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.items.push(item),
                None => groups.push(NavGroup { label, items: vec![item] }),
            }
        }
        groups
    }
}

fn validate_item(
    role: Role,
    item: &NavItem,
    depth: usize,
    seen: &mut HashSet<String>,
) -> Result<(), DomainError> {
    if item.title.trim().is_empty() {
        return Err(DomainError::EmptyNavTitle(item.path.clone()));
    }
    if normalize_path(&item.path) != item.path {
        return Err(DomainError::NonCanonicalNavPath(item.path.clone()));
    }
    if !is_segment_prefix(&item.path, role.prefix()) {
        return Err(DomainError::NavPathOutsidePortal {
            role,
            path: item.path.clone(),
        });
    }
    if !seen.insert(item.path.clone()) {
        return Err(DomainError::DuplicateNavPath {
            role,
            path: item.path.clone(),
        });
    }
    if item.is_section() && depth >= MAX_NAV_DEPTH {
        return Err(DomainError::NavTreeTooDeep(item.path.clone()));
    }
    for child in &item.children {
        validate_item(role, child, depth + 1, seen)?;
    }
    Ok(())
}
