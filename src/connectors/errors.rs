use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Errors that can occur while talking to the backend platform
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorError {
    /// HTTP request/response error
    HttpError(String),
    /// Service unreachable or timeout
    ServiceUnavailable(String),
    /// Invalid response format from the backend
    InvalidResponse(String),
    /// Request rejected by the backend as malformed (other 4xx)
    BadRequest(String),
    /// Authentication error (401/403)
    Unauthorized(String),
    /// Not found (404)
    NotFound(String),
    /// Row already exists or the change is a no-op (409)
    Conflict(String),
    /// Rate limited or exceeded quota
    RateLimited(String),
    /// Internal error in connector
    Internal(String),
}

impl ConnectorError {
    /// Failures worth another attempt for idempotent requests
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ServiceUnavailable(_) | Self::RateLimited(_)
        )
    }

    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(body),
            404 => Self::NotFound(body),
            409 => Self::Conflict(body),
            429 => Self::RateLimited(body),
            502..=504 => Self::ServiceUnavailable(body),
            400..=499 => Self::BadRequest(format!("{}: {}", status, body)),
            _ => Self::HttpError(format!("{}: {}", status, body)),
        }
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::HttpError(_) => "Backend error",
            Self::ServiceUnavailable(_) => "Service unavailable",
            Self::InvalidResponse(_) => "Invalid backend response",
            Self::BadRequest(_) => "Backend rejected the request",
            Self::Unauthorized(_) => "Unauthorized",
            Self::NotFound(msg) | Self::Conflict(msg) => msg.as_str(),
            Self::RateLimited(_) => "Rate limit exceeded",
            Self::Internal(_) => "Internal error",
        };

        JsonResponse::<()>::build()
            .set_msg(message)
            .into_http_response(self.status_code())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
