//! Backend API paths, relative to the configured base URL.
//!
//! Identifiers are interpolated as-is. No validation or percent-encoding is
//! applied, so an empty id yields `/users/`.

use std::borrow::Cow;
use std::fmt;

use reqwest::Method;

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const ME: &str = "/auth/me";
}

pub mod users {
    pub const LIST: &str = "/users";
    pub const CREATE: &str = "/users";

    pub fn update(id: &str) -> String {
        format!("{LIST}/{id}")
    }

    pub fn delete(id: &str) -> String {
        format!("{LIST}/{id}")
    }

    pub fn activate(id: &str) -> String {
        format!("{LIST}/{id}/activate")
    }

    pub fn deactivate(id: &str) -> String {
        format!("{LIST}/{id}/deactivate")
    }
}

pub mod upload {
    pub const AVATAR: &str = "/upload/avatar";
}

/// Every backend operation paired with its HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Login,
    Me,
    ListUsers,
    CreateUser,
    UpdateUser(&'a str),
    DeleteUser(&'a str),
    ActivateUser(&'a str),
    DeactivateUser(&'a str),
    UploadAvatar,
}

impl Endpoint<'_> {
    pub fn path(&self) -> Cow<'static, str> {
        match *self {
            Endpoint::Login => auth::LOGIN.into(),
            Endpoint::Me => auth::ME.into(),
            Endpoint::ListUsers => users::LIST.into(),
            Endpoint::CreateUser => users::CREATE.into(),
            Endpoint::UpdateUser(id) => users::update(id).into(),
            Endpoint::DeleteUser(id) => users::delete(id).into(),
            Endpoint::ActivateUser(id) => users::activate(id).into(),
            Endpoint::DeactivateUser(id) => users::deactivate(id).into(),
            Endpoint::UploadAvatar => upload::AVATAR.into(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Me | Endpoint::ListUsers => Method::GET,
            Endpoint::UpdateUser(_) => Method::PUT,
            Endpoint::DeleteUser(_) => Method::DELETE,
            Endpoint::Login
            | Endpoint::CreateUser
            | Endpoint::ActivateUser(_)
            | Endpoint::DeactivateUser(_)
            | Endpoint::UploadAvatar => Method::POST,
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
