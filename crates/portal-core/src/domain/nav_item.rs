// ============================================================================
// Portal Core - Navigation Item
// File: crates/portal-core/src/domain/nav_item.rs
// Description: One static entry of a role's navigation tree
// ============================================================================

use serde::Serialize;

use super::IconId;

/// Navigation entry. A parent with children is a togglable section, not a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub path: String,
    pub icon: IconId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn link(title: &str, path: &str, icon: IconId) -> Self {
        Self {
            title: title.to_string(),
            path: path.to_string(),
            icon,
            group: None,
            children: Vec::new(),
        }
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let item = NavItem::link("数据统计", "/doctor/statistics", IconId::BarChart)
            .in_group("工作台")
            .with_children(vec![NavItem::link("趋势", "/doctor/statistics/trends", IconId::TrendingUp)]);

        assert!(item.is_section());
        assert_eq!(item.group.as_deref(), Some("工作台"));
        assert!(!item.children[0].is_section());
    }
}
