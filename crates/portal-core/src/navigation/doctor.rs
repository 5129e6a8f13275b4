//! Doctor portal navigation (`/doctor`)

use crate::domain::{IconId, NavItem};

pub fn items() -> Vec<NavItem> {
    vec![
        NavItem::link("工作台", "/doctor", IconId::LayoutDashboard).in_group("工作台"),
        NavItem::link("患者管理", "/doctor/patients", IconId::Users)
            .in_group("工作台")
            .with_children(vec![
                NavItem::link("患者列表", "/doctor/patients/list", IconId::ClipboardList),
                NavItem::link("随访计划", "/doctor/patients/follow-up", IconId::CalendarClock),
            ]),
        NavItem::link("在线问诊", "/doctor/consultations", IconId::Stethoscope).in_group("诊疗"),
        NavItem::link("排班管理", "/doctor/schedule", IconId::Calendar).in_group("诊疗"),
        NavItem::link("数据统计", "/doctor/statistics", IconId::BarChart)
            .in_group("诊疗")
            .with_children(vec![
                NavItem::link("趋势分析", "/doctor/statistics/trends", IconId::TrendingUp),
                NavItem::link("诊疗报表", "/doctor/statistics/reports", IconId::FileBarChart),
            ]),
        NavItem::link("消息通知", "/doctor/notifications", IconId::Bell).in_group("账户"),
        NavItem::link("账户设置", "/doctor/settings", IconId::Settings).in_group("账户"),
    ]
}
