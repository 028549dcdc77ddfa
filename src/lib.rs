//! link_parser library: fetch a page and extract its links
//!
//! This library provides an HTTP service that fetches a web page and returns
//! every hyperlink on it, together with the link text, nested images, and any
//! email addresses found in or around the link. Relative link targets are
//! resolved against the page address.
//!
//! The extraction engine is also usable on its own:
//!
//! ```
//! use link_parser::parse::extract_document_links;
//! use scraper::Html;
//!
//! let document = Html::parse_document(
//!     r#"<a href="mailto:a@example.com">contact a@example.com</a>"#,
//! );
//! let links = extract_document_links(&document);
//! assert_eq!(links[0].emails, vec!["a@example.com", "a@example.com"]);
//! ```
//!
//! # Requirements
//!
//! The server requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling `run_server` within an async context.

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{ImageRef, LinkOutput, LinkRecord};
pub use run::run_server;

mod run {
    use anyhow::{Context, Result};
    use log::info;
    use tokio::net::TcpListener;

    use crate::app::shutdown_signal;
    use crate::config::Config;
    use crate::error_handling::InitializationError;
    use crate::parse::init_email_patterns;
    use crate::server::{serve, AppState};

    /// Runs the link extraction service until Ctrl-C or SIGTERM.
    ///
    /// Builds the shared HTTP client, compiles the email patterns, binds
    /// `config.bind:config.port` and serves `/parse` and `/status`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built
    /// - The listen address cannot be bound
    /// - The server fails while running
    ///
    /// # Example
    ///
    /// ```no_run
    /// use link_parser::{run_server, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     port: 9000,
    ///     ..Default::default()
    /// };
    /// run_server(config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_server(config: Config) -> Result<()> {
        let state = AppState::from_config(&config).context("Failed to initialize HTTP client")?;
        init_email_patterns();

        let addr = config.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| InitializationError::BindError {
                addr: addr.clone(),
                source,
            })?;

        info!(
            "Fetch timeout {}s, body limit {} bytes",
            config.timeout_seconds, config.max_body_bytes
        );

        serve(listener, state, shutdown_signal()).await
    }
}
