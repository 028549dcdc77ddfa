//! URL validation and link target resolution.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ServiceError;

/// Validates the URL submitted to `/parse`.
///
/// Trims surrounding whitespace, then rejects input that is empty, longer than
/// `MAX_URL_LENGTH`, not an absolute URL, or not http/https.
///
/// # Errors
///
/// Returns `ServiceError::Input` describing the first check that failed.
pub fn validate_input_url(raw: &str) -> Result<Url, ServiceError> {
    let link = raw.trim();
    if link.is_empty() {
        return Err(ServiceError::Input("Empty link provided".to_string()));
    }

    if link.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            link.len(),
            MAX_URL_LENGTH,
            link.chars().take(50).collect::<String>()
        );
        return Err(ServiceError::Input(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(link)
        .map_err(|e| ServiceError::Input(format!("Invalid URL provided: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ServiceError::Input(format!(
            "Invalid URL provided: unsupported scheme '{}'",
            other
        ))),
    }
}

/// `scheme://host[:port]` of `base`.
fn origin_of(base: &Url) -> String {
    let mut origin = format!("{}://{}", base.scheme(), base.host_str().unwrap_or_default());
    if let Some(port) = base.port() {
        origin.push(':');
        origin.push_str(&port.to_string());
    }
    origin
}

/// Turns a link target into an absolute URL using the page address as base.
///
/// Anything starting with `http` is taken as already absolute and returned
/// unchanged. Otherwise the target is appended to the base origin, with a `/`
/// inserted when the target does not start with one. Path, query and fragment
/// of the base are ignored, and `../` or `//host` forms are not interpreted.
pub fn resolve_href(base: &Url, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    let origin = origin_of(base);
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}
