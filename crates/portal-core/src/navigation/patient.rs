//! Patient portal navigation (`/dashboard`)

use crate::domain::{IconId, NavItem};

pub fn items() -> Vec<NavItem> {
    vec![
        NavItem::link("仪表盘", "/dashboard", IconId::Home).in_group("健康概览"),
        NavItem::link("健康档案", "/dashboard/health-records", IconId::FileText)
            .in_group("健康概览")
            .with_children(vec![
                NavItem::link("体检报告", "/dashboard/health-records/reports", IconId::ClipboardList),
                NavItem::link("病史记录", "/dashboard/health-records/medical-history", IconId::Activity),
            ]),
        NavItem::link("AI 健康顾问", "/dashboard/ai-advice", IconId::Bot).in_group("AI 服务"),
        NavItem::link("健康报告生成", "/dashboard/report-generator", IconId::FileBarChart).in_group("AI 服务"),
        NavItem::link("预约挂号", "/dashboard/appointments", IconId::Calendar).in_group("医疗服务"),
        NavItem::link("我的订单", "/dashboard/orders", IconId::ShoppingCart).in_group("医疗服务"),
        NavItem::link("消息中心", "/dashboard/messages", IconId::MessageSquare).in_group("医疗服务"),
        NavItem::link("个人设置", "/dashboard/settings", IconId::Settings).in_group("账户"),
    ]
}
