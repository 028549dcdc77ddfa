//! Server data structures.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::initialization::init_client;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<reqwest::Client>,
    pub stats: Arc<ProcessingStats>,
    pub start_time: Arc<Instant>,
    /// Largest page body the service will parse
    pub max_body_bytes: usize,
}

impl AppState {
    /// Builds the state from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            stats: Arc::new(ProcessingStats::new()),
            start_time: Arc::new(Instant::now()),
            max_body_bytes: config.max_body_bytes,
        })
    }
}

/// JSON response for `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub total_requests: usize,
    pub succeeded_requests: usize,
    pub failed_requests: usize,
    pub links_emitted: usize,
    pub errors: ErrorCounts,
}

#[derive(Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    pub method_not_allowed: usize,
    pub invalid_input: usize,
    pub upstream: UpstreamErrorCounts,
    pub parse_error: usize,
    pub serialization_error: usize,
}

#[derive(Serialize)]
pub struct UpstreamErrorCounts {
    pub total: usize,
    pub timeout: usize,
    pub connection_error: usize,
    pub non_200_status: usize,
    pub too_large: usize,
    pub other: usize,
}
