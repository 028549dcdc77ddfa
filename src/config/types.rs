//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_RESPONSE_BODY_SIZE,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line by `clap`; can also be constructed
/// programmatically through `Default`.
///
/// # Examples
///
/// ```bash
/// # Listen on the default 127.0.0.1:8080
/// link_parser
///
/// # Public interface, shorter fetch timeout, JSON logs
/// link_parser --bind 0.0.0.0 --port 9000 --timeout-seconds 5 --log-format json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "link_parser",
    about = "Fetches a web page and returns its links, images and email addresses as JSON."
)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value used when fetching pages
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Largest page body (in bytes) the service will parse
    #[arg(long, default_value_t = MAX_RESPONSE_BODY_SIZE)]
    pub max_body_bytes: usize,
}

impl Config {
    /// Socket address string the server binds to (`bind:port`).
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_defaults_match_cli_defaults() {
        // Parsing an empty command line must give the same values as Default
        let parsed = Config::try_parse_from(["link_parser"]).expect("defaults should parse");
        let default = Config::default();
        assert_eq!(parsed.bind, default.bind);
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
        assert_eq!(parsed.user_agent, default.user_agent);
        assert_eq!(parsed.max_body_bytes, default.max_body_bytes);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::try_parse_from([
            "link_parser",
            "--bind",
            "0.0.0.0",
            "--port",
            "9000",
            "--timeout-seconds",
            "3",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .expect("arguments should parse");

        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.timeout_seconds, 3);
        assert!(matches!(config.log_format, LogFormat::Json));
        assert!(matches!(config.log_level, LogLevel::Debug));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::try_parse_from(["link_parser", "--port", "70000"]);
        assert!(result.is_err());
    }
}
