//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::types::{AppState, ErrorCounts, StatusResponse, UpstreamErrorCounts};
use crate::error_handling::ErrorType;

/// JSON status endpoint with request and error counters
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;
    let total_errors = stats.total_errors();

    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        total_requests: stats.total_requests(),
        succeeded_requests: stats.total_succeeded(),
        failed_requests: total_errors,
        links_emitted: stats.total_links(),
        errors: ErrorCounts {
            total: total_errors,
            method_not_allowed: stats.get_error_count(ErrorType::MethodNotAllowed),
            invalid_input: stats.get_error_count(ErrorType::InvalidInput),
            upstream: UpstreamErrorCounts {
                total: stats.count_where(|e| e.is_upstream()),
                timeout: stats.get_error_count(ErrorType::FetchTimeoutError),
                connection_error: stats.get_error_count(ErrorType::FetchConnectError),
                non_200_status: stats.get_error_count(ErrorType::UpstreamStatusError),
                too_large: stats.get_error_count(ErrorType::ResponseTooLarge),
                other: stats.get_error_count(ErrorType::FetchRedirectError)
                    + stats.get_error_count(ErrorType::FetchBodyError)
                    + stats.get_error_count(ErrorType::FetchOtherError),
            },
            parse_error: stats.get_error_count(ErrorType::ParseError),
            serialization_error: stats.get_error_count(ErrorType::SerializationError),
        },
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}
