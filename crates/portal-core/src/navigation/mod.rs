//! Static navigation trees of the three role portals

mod admin;
mod doctor;
mod patient;

use tracing::info;

use crate::domain::{NavItem, NavTree, Role};
use crate::error::DomainError;

/// Literal items of a role, before validation.
pub fn items_for(role: Role) -> Vec<NavItem> {
    match role {
        Role::Patient => patient::items(),
        Role::Doctor => doctor::items(),
        Role::Admin => admin::items(),
    }
}

/// Validated navigation of every portal. Built once at startup.
#[derive(Debug, Clone)]
pub struct PortalNavigation {
    patient: NavTree,
    doctor: NavTree,
    admin: NavTree,
}

impl PortalNavigation {
    pub fn load() -> Result<Self, DomainError> {
        let navigation = Self {
            patient: NavTree::new(Role::Patient, items_for(Role::Patient))?,
            doctor: NavTree::new(Role::Doctor, items_for(Role::Doctor))?,
            admin: NavTree::new(Role::Admin, items_for(Role::Admin))?,
        };

        for role in Role::ALL {
            info!(
                role = %role,
                entries = navigation.tree(role).flatten().len(),
                "Navigation tree loaded"
            );
        }
        Ok(navigation)
    }

    pub fn tree(&self, role: Role) -> &NavTree {
        match role {
            Role::Patient => &self.patient,
            Role::Doctor => &self.doctor,
            Role::Admin => &self.admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_trees_load() {
        assert!(PortalNavigation::load().is_ok());
    }

    #[test]
    fn test_flattened_paths_unique() {
        let navigation = PortalNavigation::load().unwrap();
        for role in Role::ALL {
            let paths: Vec<&str> = navigation
                .tree(role)
                .flatten()
                .iter()
                .map(|item| item.path.as_str())
                .collect();
            let unique: HashSet<&str> = paths.iter().copied().collect();
            assert_eq!(paths.len(), unique.len(), "duplicate path in {} tree", role);
        }
    }

    #[test]
    fn test_each_tree_contains_its_root() {
        let navigation = PortalNavigation::load().unwrap();
        for role in Role::ALL {
            assert!(navigation.tree(role).find(role.root_path()).is_some());
        }
    }

    #[test]
    fn test_depth_at_most_two() {
        for role in Role::ALL {
            for item in items_for(role) {
                assert!(item.children.iter().all(|child| child.children.is_empty()));
            }
        }
    }
}
