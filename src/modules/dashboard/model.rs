use serde::Serialize;

use crate::{
    constants::paths,
    modules::dashboard::navigation::{visible_for, NavItem},
    utils::Claims,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Account,
    Users,
    TaskTypes,
    Tasks,
    MyTasks,
    Messages,
    Timekeeping,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Account => "account",
            Page::Users => "users",
            Page::TaskTypes => "taskTypes",
            Page::Tasks => "tasks",
            Page::MyTasks => "myTasks",
            Page::Messages => "messages",
            Page::Timekeeping => "timekeeping",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Account => "Account",
            Page::Users => "Users",
            Page::TaskTypes => "Task Types",
            Page::Tasks => "Tasks",
            Page::MyTasks => "My Tasks",
            Page::Messages => "Messages",
            Page::Timekeeping => "Timekeeping",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Overview => paths::dashboard::OVERVIEW,
            Page::Account => paths::dashboard::ACCOUNT,
            Page::Users => paths::dashboard::USERS,
            Page::TaskTypes => paths::dashboard::TASK_TYPES,
            Page::Tasks => paths::dashboard::TASKS,
            Page::MyTasks => paths::dashboard::MY_TASKS,
            Page::Messages => paths::dashboard::MESSAGES,
            Page::Timekeeping => paths::dashboard::TIMEKEEPING,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub key: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub viewer_id: Option<String>,
    pub navigation: Vec<NavItem>,
}

impl PageResponse {
    pub fn new(page: Page, claims: Option<&Claims>) -> Self {
        PageResponse {
            key: page.key(),
            title: page.title(),
            path: page.path(),
            viewer_id: claims.map(|c| c.sub.clone()),
            navigation: visible_for(claims.map(|c| c.role)),
        }
    }
}
