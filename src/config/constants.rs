//! Configuration constants.
//!
//! This module defines the constants used throughout the service, including
//! network defaults, size limits, and the markup names the extractor keys on.

// Server defaults
/// Default address the HTTP server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default port the HTTP server listens on
pub const DEFAULT_PORT: u16 = 8080;
/// Path of the link extraction endpoint
pub const PARSE_ROUTE: &str = "/parse";
/// Path of the JSON status endpoint
pub const STATUS_ROUTE: &str = "/status";

// Network operation timeouts
/// Per-fetch timeout in seconds (covers connect, headers and body)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Maximum number of redirect hops to follow when fetching a page
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for page fetches.
///
/// Uses a generic Chrome-like string so that sites serve the same markup a
/// browser would get. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Pages larger than this are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum input URL length (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Markup names
pub const ANCHOR_TAG: &str = "a";
pub const IMAGE_TAG: &str = "img";
pub const HREF_ATTR: &str = "href";
pub const SRC_ATTR: &str = "src";
pub const ALT_ATTR: &str = "alt";
/// Scheme prefix that marks an anchor as a mail-link
pub const MAILTO_PREFIX: &str = "mailto:";
