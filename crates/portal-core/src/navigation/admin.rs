//! SaaS admin console navigation (`/saas-admin`)

use crate::domain::{IconId, NavItem};

pub fn items() -> Vec<NavItem> {
    vec![
        NavItem::link("平台概览", "/saas-admin", IconId::LayoutDashboard),
        NavItem::link("租户管理", "/saas-admin/tenants", IconId::Building)
            .in_group("运营")
            .with_children(vec![
                NavItem::link("租户列表", "/saas-admin/tenants/list", IconId::ClipboardList),
                NavItem::link("订阅套餐", "/saas-admin/tenants/plans", IconId::CreditCard),
            ]),
        NavItem::link("用户管理", "/saas-admin/users", IconId::Users).in_group("运营"),
        NavItem::link("医生审核", "/saas-admin/doctors", IconId::UserCheck).in_group("运营"),
        NavItem::link("订单与账单", "/saas-admin/billing", IconId::CreditCard).in_group("运营"),
        NavItem::link("系统设置", "/saas-admin/settings", IconId::Settings)
            .in_group("系统")
            .with_children(vec![
                NavItem::link("基础设置", "/saas-admin/settings/general", IconId::Settings),
                NavItem::link("AI 模型", "/saas-admin/settings/ai-models", IconId::Cpu),
                NavItem::link("安全策略", "/saas-admin/settings/security", IconId::Shield),
            ]),
    ]
}
