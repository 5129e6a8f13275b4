//! # Portal Core - Domain Module
//! 
//! Domain entities for the care portal shell.

pub mod role;
pub mod icon;
pub mod nav_item;
pub mod nav_tree;
pub mod viewport;
pub mod flow;

// Re-export all entities and enums
pub use role::Role;
pub use icon::IconId;
pub use nav_item::NavItem;
pub use nav_tree::{NavGroup, NavTree};
pub use viewport::Viewport;
pub use flow::{HealthAdviceInput, HealthAdviceOutput, ReportInput, ReportOutput};
