use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur while talking to an upstream recipe service
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Transport-level failure (connection refused, DNS, per-request timeout)
    #[error("Upstream request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}: {body}")]
    StatusError { status: u16, body: String },

    /// The whole proxied call exceeded its outer deadline
    #[error("Upstream call timed out after {0:?}")]
    Timeout(Duration),

    /// Every attempt of a retry sequence failed
    #[error("Request failed after {retries} retries: {last}")]
    RetriesExhausted {
        retries: u32,
        last: Box<ProxyError>,
    },

    /// Upstream payload did not contain an expected field
    #[error("No {0} data in upstream response")]
    MissingField(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ProxyError {
    /// Whether this failure should be reported to the caller as a timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            ProxyError::Timeout(_) => true,
            ProxyError::RequestError(e) => e.is_timeout(),
            ProxyError::RetriesExhausted { last, .. } => last.is_timeout(),
            ProxyError::IoError(e) => e.kind() == std::io::ErrorKind::TimedOut,
            // Never inspect upstream response bodies
            ProxyError::StatusError { .. }
            | ProxyError::MissingField(_)
            | ProxyError::ConfigError(_)
            | ProxyError::JsonError(_) => false,
        }
    }

    /// Upstream status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ProxyError::StatusError { status, .. } => Some(*status),
            ProxyError::RequestError(e) => e.status().map(|s| s.as_u16()),
            ProxyError::RetriesExhausted { last, .. } => last.status(),
            _ => None,
        }
    }
}

/// Errors from the restaurant dish store and its data file
#[derive(Error, Debug)]
pub enum DishError {
    #[error("{0}")]
    Invalid(&'static str),

    #[error("Dish not found")]
    NotFound,

    /// Data file could not be read or written
    #[error("Data file error: {0}")]
    IoError(#[from] std::io::Error),

    /// Data file is not a JSON array of dishes
    #[error("Data file is not valid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<DishError> for ApiError {
    fn from(e: DishError) -> Self {
        let status = match e {
            DishError::Invalid(_) => StatusCode::BAD_REQUEST,
            DishError::NotFound => StatusCode::NOT_FOUND,
            DishError::IoError(_) | DishError::JsonError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::message(status, e.to_string())
    }
}

/// An error response returned by a route handler
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// `{ "error": message }` with the given status
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// `{ "detail": detail, "error": error }` with the given status
    pub fn detailed(status: StatusCode, detail: &str, error: impl ToString) -> Self {
        Self::new(
            status,
            json!({ "detail": detail, "error": error.to_string() }),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classification() {
        assert!(ProxyError::Timeout(Duration::from_secs(60)).is_timeout());

        let nested = ProxyError::RetriesExhausted {
            retries: 3,
            last: Box::new(ProxyError::Timeout(Duration::from_secs(1))),
        };
        assert!(nested.is_timeout());

        let status = ProxyError::StatusError {
            status: 502,
            body: "Bad gateway".to_string(),
        };
        assert!(!status.is_timeout());
    }

    #[test]
    fn test_status_body_mentioning_timeout_is_not_a_timeout() {
        let err = ProxyError::RetriesExhausted {
            retries: 3,
            last: Box::new(ProxyError::StatusError {
                status: 500,
                body: "database timeout while loading model".to_string(),
            }),
        };
        assert!(!err.is_timeout());

        let io = ProxyError::IoError(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "read timed out",
        ));
        assert!(io.is_timeout());
    }

    #[test]
    fn test_status_is_read_through_retries() {
        let err = ProxyError::RetriesExhausted {
            retries: 3,
            last: Box::new(ProxyError::StatusError {
                status: 422,
                body: "{\"detail\":\"bad\"}".to_string(),
            }),
        };
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("after 3 retries"));
        assert!(ProxyError::MissingField("meal_plan").status().is_none());
    }

    #[test]
    fn test_dish_error_status() {
        let err = ApiError::from(DishError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body, json!({ "error": "Dish not found" }));

        let err = ApiError::from(DishError::Invalid("dishId is required"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = ApiError::from(DishError::from(io));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body["error"], "Data file error: read-only");
    }

    #[test]
    fn test_missing_field_message() {
        let err = ProxyError::MissingField("meal_plan");
        assert_eq!(err.to_string(), "No meal_plan data in upstream response");
    }
}
