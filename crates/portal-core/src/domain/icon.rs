//! Icon identifiers referenced by navigation items

use serde::{Deserialize, Serialize};

/// Known glyphs. The rendering layer owns the lookup to actual assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Home,
    LayoutDashboard,
    Activity,
    FileText,
    ClipboardList,
    Bot,
    FileBarChart,
    Calendar,
    CalendarClock,
    ShoppingCart,
    MessageSquare,
    Users,
    UserCheck,
    Stethoscope,
    BarChart,
    TrendingUp,
    Building,
    CreditCard,
    Bell,
    Shield,
    Settings,
    Cpu,
}
