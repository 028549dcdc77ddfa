//! Error categorization.
//!
//! This module maps transport errors onto the `ErrorType` categories and
//! records failures in the shared statistics.

use super::stats::ProcessingStats;
use super::types::{ErrorType, ServiceError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status errors never reach this function (non-200 responses are turned into
/// `ServiceError::UpstreamStatus` before the body is read), so only the
/// transport-level kinds are distinguished.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::FetchTimeoutError
    } else if error.is_connect() {
        ErrorType::FetchConnectError
    } else if error.is_redirect() {
        ErrorType::FetchRedirectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::FetchBodyError
    } else {
        ErrorType::FetchOtherError
    }
}

/// Records a failed request in the processing statistics and logs it.
///
/// Upstream failures are logged at warn level since they are expected in normal
/// operation; caller mistakes (bad method, bad input) only at debug level.
pub fn update_error_stats(stats: &ProcessingStats, error: &ServiceError) {
    let error_type = error.error_type();
    stats.increment_error(error_type);
    if matches!(error_type, ErrorType::MethodNotAllowed | ErrorType::InvalidInput) {
        log::debug!("Rejected request ({}): {}", error_type, error);
    } else {
        log::warn!("Request failed ({}): {}", error_type, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 9 on localhost is almost never listening; connection is refused
        let client = reqwest::Client::new();
        let error = client
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .expect_err("nothing should listen on the discard port");
        let category = categorize_reqwest_error(&error);
        assert!(
            matches!(
                category,
                ErrorType::FetchConnectError | ErrorType::FetchOtherError
            ),
            "unexpected category {:?}",
            category
        );
        assert!(category.is_upstream());
    }

    #[test]
    fn test_update_error_stats_counts_each_failure() {
        let stats = ProcessingStats::new();
        update_error_stats(&stats, &ServiceError::UpstreamStatus(404));
        update_error_stats(&stats, &ServiceError::UpstreamStatus(500));
        update_error_stats(&stats, &ServiceError::Method);

        assert_eq!(stats.get_error_count(ErrorType::UpstreamStatusError), 2);
        assert_eq!(stats.get_error_count(ErrorType::MethodNotAllowed), 1);
        assert_eq!(stats.total_errors(), 3);
    }
}
