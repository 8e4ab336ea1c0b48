use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Errors that can occur during external service communication
#[derive(Debug)]
pub enum ConnectorError {
    /// Required setting (API key, URL) is missing
    NotConfigured(String),
    /// Service unreachable, timed out or answered with a non-2xx status
    ServiceUnavailable(String),
    /// Invalid response format from external service
    InvalidResponse(String),
    /// Internal error in connector
    Internal(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured(msg) => write!(f, "Not configured: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl ConnectorError {
    /// What the client is allowed to see, details stay in the server log.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::NotConfigured(_) => "External service is not configured",
            Self::ServiceUnavailable(_) => "Unable to reach external service",
            Self::InvalidResponse(_) => "Unexpected response from external service",
            Self::Internal(_) => "Internal error",
        }
    }
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        JsonResponse::build().failure(self.public_message(), self.status_code())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
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
        } else if err.is_status() {
            Self::ServiceUnavailable(format!("Unexpected status: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::ServiceUnavailable(err.to_string())
        }
    }
}
