//! Request-level application logic.
//!
//! This module provides:
//! - Input URL validation and link target resolution
//! - Response object assembly (resolve, filter, shape)
//! - Graceful shutdown signal handling

mod records;
mod shutdown;
mod url;

pub use records::build_link_outputs;
pub use shutdown::shutdown_signal;
pub use url::{resolve_href, validate_input_url};
