use serde::Serialize;

use crate::{constants::paths, modules::user::schema::UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub key: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub admin_only: bool,
}

/// Side navigation, in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        key: "overview",
        title: "Overview",
        href: paths::dashboard::OVERVIEW,
        icon: "chart-pie",
        admin_only: false,
    },
    NavItem {
        key: "users",
        title: "Users",
        href: paths::dashboard::USERS,
        icon: "users",
        admin_only: true,
    },
    NavItem {
        key: "taskTypes",
        title: "Task Types",
        href: paths::dashboard::TASK_TYPES,
        icon: "list",
        admin_only: true,
    },
    NavItem {
        key: "account",
        title: "Account",
        href: paths::dashboard::ACCOUNT,
        icon: "user",
        admin_only: false,
    },
];

pub fn visible_for(role: Option<UserRole>) -> Vec<NavItem> {
    let is_admin = role == Some(UserRole::Admin);
    NAV_ITEMS.iter().filter(|item| is_admin || !item.admin_only).copied().collect()
}
