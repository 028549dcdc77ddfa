//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (start-up errors and the per-request taxonomy)
//! - Error categorization for transport failures
//! - Processing statistics tracking (requests, links, errors by category)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, ServiceError};
