//! Error type definitions.
//!
//! This module defines the start-up error types, the per-request error taxonomy
//! and the categories those errors are counted under.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the server socket.
    #[error("Failed to bind server to {addr}: {source}")]
    BindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that end a `/parse` request.
///
/// Every variant is terminal: there is no retry and no partial output. The
/// extraction engine itself never fails, so each variant originates at a
/// boundary (request input, fetch, parser task, serialization).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request used a method other than POST.
    #[error("Method not allowed")]
    Method,

    /// The request body was empty, not a URL, or not an http(s) URL.
    #[error("{0}")]
    Input(String),

    /// Transport failure while fetching the target page.
    #[error("Error fetching URL: {0}")]
    Fetch(#[from] ReqwestError),

    /// The target page answered with something other than 200 OK.
    #[error("Received non-200 status code: {0}")]
    UpstreamStatus(u16),

    /// The target page body is larger than the configured limit.
    #[error("Response body exceeds {limit} bytes")]
    ResponseTooLarge { limit: usize },

    /// The parser task did not complete.
    #[error("Error parsing HTML: {0}")]
    Parse(String),

    /// The extracted links could not be encoded as JSON.
    #[error("Error creating JSON response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// HTTP status code returned to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Method => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::Input(_) => StatusCode::BAD_REQUEST,
            ServiceError::Fetch(_)
            | ServiceError::UpstreamStatus(_)
            | ServiceError::ResponseTooLarge { .. }
            | ServiceError::Parse(_)
            | ServiceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category this error is counted under in `ProcessingStats`.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ServiceError::Method => ErrorType::MethodNotAllowed,
            ServiceError::Input(_) => ErrorType::InvalidInput,
            ServiceError::Fetch(e) => categorize_reqwest_error(e),
            ServiceError::UpstreamStatus(_) => ErrorType::UpstreamStatusError,
            ServiceError::ResponseTooLarge { .. } => ErrorType::ResponseTooLarge,
            ServiceError::Parse(_) => ErrorType::ParseError,
            ServiceError::Serialization(_) => ErrorType::SerializationError,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        // Plain-text body; never carries a JSON content type
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Categories of request failures tracked by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Request boundary
    MethodNotAllowed,
    InvalidInput,
    // Fetch errors
    FetchTimeoutError,
    FetchConnectError,
    FetchRedirectError,
    FetchBodyError,
    FetchOtherError,
    UpstreamStatusError,
    ResponseTooLarge,
    // Parse and output
    ParseError,
    SerializationError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::MethodNotAllowed => "Method not allowed",
            ErrorType::InvalidInput => "Invalid input URL",
            ErrorType::FetchTimeoutError => "Fetch timeout error",
            ErrorType::FetchConnectError => "Fetch connect error",
            ErrorType::FetchRedirectError => "Fetch redirect error",
            ErrorType::FetchBodyError => "Fetch body error",
            ErrorType::FetchOtherError => "Fetch other error",
            ErrorType::UpstreamStatusError => "Upstream non-200 status",
            ErrorType::ResponseTooLarge => "Response too large",
            ErrorType::ParseError => "HTML parse error",
            ErrorType::SerializationError => "JSON serialization error",
        }
    }

    /// True for failures caused by the target site or the network path to it.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ErrorType::FetchTimeoutError
                | ErrorType::FetchConnectError
                | ErrorType::FetchRedirectError
                | ErrorType::FetchBodyError
                | ErrorType::FetchOtherError
                | ErrorType::UpstreamStatusError
                | ErrorType::ResponseTooLarge
        )
    }
}
