//! Domain services (portal shell logic and AI flows)

pub mod active_path;
pub mod sidebar;
pub mod layout;
pub mod auth_gate;
pub mod flows;

pub use active_path::{breadcrumbs, is_active, resolve_active};
pub use sidebar::{SidebarAction, SidebarController, SidebarState, SidebarView};
pub use layout::{LayoutEvent, LayoutShell, ShellFrame};
pub use auth_gate::{AuthStatus, DoctorSession, GateDecision, GateRules};
pub use flows::FlowService;
