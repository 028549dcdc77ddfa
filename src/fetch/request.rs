//! HTTP request building.

/// Browser-like request headers for page fetches.
///
/// Some sites serve reduced or different markup to clients that do not look
/// like a browser; sending a realistic `Accept`/`Accept-Language` set keeps
/// the extracted links close to what a visitor sees.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_applied() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply_to_request_builder(client.get("http://example.com/"))
            .build()
            .expect("request should build");
        let headers = request.headers();
        assert!(headers
            .get(reqwest::header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html")));
        assert_eq!(
            headers
                .get(reqwest::header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok()),
            Some("en-US,en;q=0.9")
        );
    }
}
