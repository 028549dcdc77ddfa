//! HTTP handlers.

mod parse;
mod status;

pub use parse::{method_not_allowed, parse_handler};
pub use status::status_handler;
