pub mod admin_guard;

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
    middleware::Next,
    web, Error, HttpMessage, HttpRequest,
};

use crate::{
    api::error::{self, SystemError},
    constants::paths,
    utils::Claims,
};

pub use admin_guard::{admin_guard, enforce, GuardOutcome};

/// Path prefixes only administrators may open. Matching is case-sensitive.
pub const ADMIN_ONLY_PREFIXES: [&str; 2] = [paths::dashboard::USERS, paths::dashboard::TASK_TYPES];

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    AdminOnly,
}

pub fn classify(path: &str) -> RouteAccess {
    if ADMIN_ONLY_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        RouteAccess::AdminOnly
    } else {
        RouteAccess::Public
    }
}

/// Secret shared with the backend that signs access tokens.
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

/// Tags every `/dashboard` request with its [`RouteAccess`] and lets it
/// through. Handlers decide what to do with the tag via [`enforce`].
pub async fn route_guard<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    let access = classify(req.path());
    log::debug!("{} {} classified as {:?}", req.method(), req.path(), access);

    req.extensions_mut().insert(access);

    next.call(req).await
}

/// Attaches the caller's [`Claims`] when a valid token is present. Never
/// rejects a caller: anonymous requests reach the handler without claims.
/// An app mounted without [`AuthSettings`] answers 500.
pub async fn identify<B>(req: ServiceRequest, next: Next<B>) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    let Some(secret) = req.app_data::<web::Data<AuthSettings>>().map(|s| s.jwt_secret.clone())
    else {
        let err = SystemError::config("AuthSettings is not registered as app data");
        return Err(error::Error::from(err).into());
    };

    if let Some(token) = extract_token(req.request()) {
        match Claims::decode(&token, secret.as_bytes()) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => log::warn!("Ignoring invalid access token: {e}"),
        }
    }

    next.call(req).await
}

fn extract_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned)
        .or_else(|| req.cookie(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string()))
}

pub fn get_claims(req: &HttpRequest) -> Option<Claims> {
    req.extensions().get::<Claims>().cloned()
}

pub fn get_route_access(req: &HttpRequest) -> RouteAccess {
    req.extensions().get::<RouteAccess>().copied().unwrap_or_else(|| classify(req.path()))
}
