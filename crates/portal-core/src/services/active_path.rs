//! Active-path resolution for navigation highlighting

use portal_shared::utils::{is_segment_prefix, normalize_path};

use crate::domain::{NavItem, NavTree};

/// Whether `candidate` is active for `current`.
///
/// Exact match always wins. Otherwise the candidate must be a segment prefix
/// of the current path and must not be the portal root, which would otherwise
/// match every page of the portal.
pub fn is_active(current: &str, candidate: &str, root: &str) -> bool {
    let current = normalize_path(current);
    let candidate = normalize_path(candidate);

    if current == candidate {
        return true;
    }
    if candidate == normalize_path(root) {
        return false;
    }
    is_segment_prefix(&current, &candidate)
}

/// Most specific item active for `current`, if any.
pub fn resolve_active<'a>(tree: &'a NavTree, current: &str) -> Option<&'a NavItem> {
    let root = tree.role().root_path();
    tree.flatten()
        .into_iter()
        .filter(|item| is_active(current, &item.path, root))
        .max_by_key(|item| item.path.len())
}

/// Trail from the top-level item down to the resolved one.
pub fn breadcrumbs<'a>(tree: &'a NavTree, current: &str) -> Vec<&'a NavItem> {
    let Some(active) = resolve_active(tree, current) else {
        return Vec::new();
    };
    match tree.parent_of(&active.path) {
        Some(parent) => vec![parent, active],
        None => vec![active],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::PortalNavigation;
    use crate::domain::Role;

    #[test]
    fn test_prefix_match_on_parent() {
        assert!(is_active("/doctor/statistics/trends", "/doctor/statistics", "/doctor"));
    }

    #[test]
    fn test_segment_boundary() {
        assert!(!is_active("/doctor/statistics/trends", "/doctor/statistics-other", "/doctor"));
        assert!(!is_active("/doctor/statistics-other", "/doctor/statistics", "/doctor"));
    }

    #[test]
    fn test_root_only_matches_exactly() {
        assert!(is_active("/doctor", "/doctor", "/doctor"));
        assert!(is_active("/doctor/", "/doctor", "/doctor"));
        assert!(!is_active("/doctor/patients", "/doctor", "/doctor"));
    }

    #[test]
    fn test_query_string_ignored() {
        assert!(is_active("/dashboard/orders?page=2", "/dashboard/orders", "/dashboard"));
    }

    #[test]
    fn test_most_specific_wins() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Doctor);

        let active = resolve_active(tree, "/doctor/statistics/trends").unwrap();
        assert_eq!(active.path, "/doctor/statistics/trends");

        let active = resolve_active(tree, "/doctor/statistics/trends/weekly").unwrap();
        assert_eq!(active.path, "/doctor/statistics/trends");

        let active = resolve_active(tree, "/doctor").unwrap();
        assert_eq!(active.path, "/doctor");

        assert!(resolve_active(tree, "/doctor/unknown-page").is_none());
    }

    #[test]
    fn test_breadcrumbs() {
        let navigation = PortalNavigation::load().unwrap();
        let tree = navigation.tree(Role::Doctor);

        let trail: Vec<&str> = breadcrumbs(tree, "/doctor/patients/list")
            .iter()
            .map(|item| item.path.as_str())
            .collect();
        assert_eq!(trail, vec!["/doctor/patients", "/doctor/patients/list"]);

        assert_eq!(breadcrumbs(tree, "/doctor/schedule").len(), 1);
        assert!(breadcrumbs(tree, "/dashboard").is_empty());
    }
}
