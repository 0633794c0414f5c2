use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::{borrow::Cow, time::Duration};

/// Fallback message of a non-2xx response whose body carries no `message`.
pub const FALLBACK_HTTP_MESSAGE: &str = "Upload failed";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Internal Server Error")]
    InternalServer,
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub message: Cow<'static, str>,
}

impl Error {
    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match *self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InternalServer => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());

        match self {
            Error::NotFound(msg) => res.json(ErrorBody { message: msg.clone() }),
            Error::InternalServer => {
                res.json(ErrorBody { message: "Internal Server Error".into() })
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // jwt errors
    #[error("JWT Error")]
    JwtError(#[from] jsonwebtoken::errors::Error),
    // sqlx errors
    #[error("Database Error : {0}")]
    DatabaseError(Cow<'static, str>),
    // Custom Errors
    #[error("Configuration Error: {0}")]
    Config(Cow<'static, str>),
    #[error("Record Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Internal System Error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::NotFound(msg) => Error::NotFound(msg),
            _ => {
                log::error!("Internal Server Error: {:?}", value);
                Error::InternalServer
            }
        }
    }
}

impl From<sqlx::Error> for SystemError {
    fn from(err: sqlx::Error) -> Self {
        log::error!("{:?}", err);
        match &err {
            sqlx::Error::RowNotFound => SystemError::NotFound("Record not found".into()),
            sqlx::Error::Database(db_err) => {
                if db_err.code().as_deref() == Some("42P01") {
                    return SystemError::NotFound("Resource not found".into());
                }
                log::error!("Unhandled DB error: {:?}", db_err);
                SystemError::DatabaseError(db_err.message().to_string().into())
            }
            _ => SystemError::InternalError(Box::new(err)),
        }
    }
}

impl SystemError {
    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Failure of an outbound call to the backend API.
///
/// `Display` yields the message callers show to users: the server's
/// `message` for HTTP errors, `"Network error"` when no response arrived.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Http { status: reqwest::StatusCode, message: Cow<'static, str> },
    #[error("Network error")]
    Network(#[source] reqwest::Error),
    #[error("Request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    #[error("Malformed response: {0}")]
    MalformedResponse(Cow<'static, str>),
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),
    #[error("HTTP client could not be built")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its raw body.
    pub fn from_response(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(FALLBACK_HTTP_MESSAGE));

        ApiError::Http { status, message }
    }

    pub fn invalid_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::InvalidRequest(errors.to_string().into())
    }
}
