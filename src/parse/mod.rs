//! HTML link extraction.
//!
//! This module turns a parsed document into link records:
//! - Anchor detection with target, trimmed text and nested images
//! - Email detection from `mailto:` links and from link text
//!
//! Parsing itself is done by `scraper` (html5ever), which never fails on
//! malformed markup.

mod email;
mod links;

// Re-export public API
pub use email::{find_emails, init_email_patterns, is_valid_email};
pub use links::{extract_document_links, extract_links};
