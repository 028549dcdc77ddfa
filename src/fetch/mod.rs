//! Page fetching.
//!
//! One GET per request, no retries. Anything but `200 OK` is a terminal
//! failure, and bodies are capped at the configured size before parsing.

mod request;

use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::error_handling::ServiceError;
use request::RequestHeaders;

/// Fetches `url` and returns the body as text.
///
/// The body is read chunk by chunk so an oversized page is abandoned as soon
/// as it crosses `max_body_bytes`, whether or not the server announced a
/// `Content-Length`. Bytes are decoded as UTF-8, replacing invalid sequences.
///
/// # Errors
///
/// - `ServiceError::Fetch` on transport failure (DNS, connect, timeout, TLS, body read)
/// - `ServiceError::UpstreamStatus` when the final response is not `200 OK`
/// - `ServiceError::ResponseTooLarge` when the body exceeds `max_body_bytes`
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &Url,
    max_body_bytes: usize,
) -> Result<String, ServiceError> {
    let mut response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
        .send()
        .await?;

    let status = response.status();
    debug!("Fetched {} -> {} (final url {})", url, status, response.url());
    if status != StatusCode::OK {
        return Err(ServiceError::UpstreamStatus(status.as_u16()));
    }

    if let Some(length) = response.content_length() {
        if length > max_body_bytes as u64 {
            return Err(ServiceError::ResponseTooLarge {
                limit: max_body_bytes,
            });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_body_bytes {
            return Err(ServiceError::ResponseTooLarge {
                limit: max_body_bytes,
            });
        }
        body.extend_from_slice(&chunk);
    }
    debug!("Read {} body bytes from {}", body.len(), url);

    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as AxumStatus;
    use axum::{routing::get, Router};
    use tokio::net::TcpListener;

    async fn start_site(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_page_ok() {
        let site = start_site(Router::new().route("/", get(|| async { "<p>hi</p>" }))).await;
        let client = reqwest::Client::new();
        let url = Url::parse(&site).expect("valid");
        let body = fetch_page(&client, &url, 1024).await.expect("fetch ok");
        assert_eq!(body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fetch_page_non_200() {
        let site = start_site(Router::new().route(
            "/",
            get(|| async { (AxumStatus::NOT_FOUND, "missing") }),
        ))
        .await;
        let client = reqwest::Client::new();
        let url = Url::parse(&site).expect("valid");
        let err = fetch_page(&client, &url, 1024).await.unwrap_err();
        assert!(matches!(err, ServiceError::UpstreamStatus(404)));
    }

    #[tokio::test]
    async fn test_fetch_page_non_200_success_status() {
        // 204 is a success status but not 200; still rejected
        let site = start_site(Router::new().route("/", get(|| async { AxumStatus::NO_CONTENT })))
            .await;
        let client = reqwest::Client::new();
        let url = Url::parse(&site).expect("valid");
        let err = fetch_page(&client, &url, 1024).await.unwrap_err();
        assert!(matches!(err, ServiceError::UpstreamStatus(204)));
    }

    #[tokio::test]
    async fn test_fetch_page_too_large() {
        let site = start_site(Router::new().route("/", get(|| async { "x".repeat(4096) }))).await;
        let client = reqwest::Client::new();
        let url = Url::parse(&site).expect("valid");
        let err = fetch_page(&client, &url, 1024).await.unwrap_err();
        assert!(matches!(err, ServiceError::ResponseTooLarge { limit: 1024 }));
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_utf8_is_replaced() {
        let site = start_site(Router::new().route(
            "/",
            get(|| async { vec![b'o', b'k', 0xff] }),
        ))
        .await;
        let client = reqwest::Client::new();
        let url = Url::parse(&site).expect("valid");
        let body = fetch_page(&client, &url, 1024).await.expect("fetch ok");
        assert_eq!(body, "ok\u{fffd}");
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        let client = reqwest::Client::new();
        let url = Url::parse("http://127.0.0.1:9/").expect("valid");
        let err = fetch_page(&client, &url, 1024).await.unwrap_err();
        assert!(matches!(err, ServiceError::Fetch(_)));
        assert!(err.error_type().is_upstream());
    }
}
