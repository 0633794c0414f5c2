//! Client-side routes of the dashboard.

pub mod auth {
    pub const SIGN_IN: &str = "/auth/sign-in";
    pub const SIGN_UP: &str = "/auth/sign-up";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
}

pub mod dashboard {
    pub const OVERVIEW: &str = "/dashboard";
    pub const ACCOUNT: &str = "/dashboard/account";
    pub const USERS: &str = "/dashboard/users";
    pub const TASK_TYPES: &str = "/dashboard/task-types";
    pub const TASKS: &str = "/dashboard/tasks";
    pub const MY_TASKS: &str = "/dashboard/my-tasks";
    pub const MESSAGES: &str = "/dashboard/messages";
    pub const TIMEKEEPING: &str = "/dashboard/timekeeping";
}
