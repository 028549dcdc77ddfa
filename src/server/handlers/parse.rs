//! Link extraction handler.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use log::info;
use scraper::Html;

use super::super::types::AppState;
use crate::app::{build_link_outputs, validate_input_url};
use crate::error_handling::{update_error_stats, ServiceError};
use crate::fetch::fetch_page;
use crate::models::LinkRecord;
use crate::parse::extract_document_links;

/// `POST /parse`: body is a single absolute URL; returns the page's links as JSON.
pub async fn parse_handler(State(state): State<AppState>, body: Bytes) -> Response {
    state.stats.record_request();
    match process_link(&state, &body).await {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => {
            update_error_stats(&state.stats, &e);
            e.into_response()
        }
    }
}

/// Any method other than POST on `/parse`.
pub async fn method_not_allowed(State(state): State<AppState>) -> Response {
    state.stats.record_request();
    let error = ServiceError::Method;
    update_error_stats(&state.stats, &error);
    error.into_response()
}

async fn process_link(state: &AppState, body: &[u8]) -> Result<Vec<u8>, ServiceError> {
    let raw = String::from_utf8_lossy(body);
    let base = validate_input_url(&raw)?;

    let page = fetch_page(&state.client, &base, state.max_body_bytes).await?;
    let records = parse_page(page).await?;
    let anchors = records.len();

    let outputs = build_link_outputs(&base, records);
    let json = serde_json::to_vec(&outputs)?;

    state.stats.record_success(outputs.len());
    info!(
        "Extracted {} links ({} anchors) from {}",
        outputs.len(),
        anchors,
        base
    );
    Ok(json)
}

/// Parses the fetched page and extracts its anchors on the blocking pool.
///
/// The tree never leaves the blocking task; only the owned records come back.
async fn parse_page(page: String) -> Result<Vec<LinkRecord>, ServiceError> {
    tokio::task::spawn_blocking(move || {
        let document = Html::parse_document(&page);
        extract_document_links(&document)
    })
    .await
    .map_err(|e| ServiceError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_page_extracts_records() {
        let page = r#"<a href="/one">One</a><a href="/two">Two</a>"#.to_string();
        let records = parse_page(page).await.expect("parse succeeds");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text, "Two");
    }

    #[tokio::test]
    async fn test_parse_page_empty_body() {
        let records = parse_page(String::new()).await.expect("parse succeeds");
        assert!(records.is_empty());
    }
}
