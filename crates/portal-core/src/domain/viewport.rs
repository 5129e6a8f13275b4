//! Viewport class of the requesting client

use serde::{Deserialize, Serialize};

/// Viewport class, decides overlay vs. persistent sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn is_constrained(&self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}
