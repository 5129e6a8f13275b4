//! Icon lookup for the rendering layer

use std::collections::BTreeMap;

use portal_core::domain::{IconId, NavTree};

/// Glyph name in the front-end icon set (lucide).
pub fn glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Home => "home",
        IconId::LayoutDashboard => "layout-dashboard",
        IconId::Activity => "activity",
        IconId::FileText => "file-text",
        IconId::ClipboardList => "clipboard-list",
        IconId::Bot => "bot",
        IconId::FileBarChart => "file-bar-chart",
        IconId::Calendar => "calendar",
        IconId::CalendarClock => "calendar-clock",
        IconId::ShoppingCart => "shopping-cart",
        IconId::MessageSquare => "message-square",
        IconId::Users => "users",
        IconId::UserCheck => "user-check",
        IconId::Stethoscope => "stethoscope",
        IconId::BarChart => "bar-chart-3",
        IconId::TrendingUp => "trending-up",
        IconId::Building => "building-2",
        IconId::CreditCard => "credit-card",
        IconId::Bell => "bell",
        IconId::Shield => "shield",
        IconId::Settings => "settings",
        IconId::Cpu => "cpu",
    }
}

/// Lookup table restricted to the icons a tree uses.
pub fn table_for(tree: &NavTree) -> BTreeMap<IconId, &'static str> {
    tree.flatten()
        .into_iter()
        .map(|item| (item.icon, glyph(item.icon)))
        .collect()
}
