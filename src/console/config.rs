//! Configuration types for the admin console.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling console behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Command-line arguments for the helpergpt-admin tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ConsoleArgs {
    /// Backend base URL.
    #[arrrg(optional, "Backend URL (default: $HELPERGPT_URL or http://127.0.0.1:8000)", "URL")]
    pub backend: Option<String>,

    /// Per-request timeout in seconds.
    #[arrrg(optional, "Per-request timeout in seconds (default: 60)", "SECS")]
    pub timeout: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a console session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL; `None` falls back to the client's own default.
    pub backend_url: Option<String>,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl From<ConsoleArgs> for ConsoleConfig {
    fn from(args: ConsoleArgs) -> Self {
        Self {
            backend_url: args.backend,
            timeout: Duration::from_secs(args.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            use_color: !args.no_color,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig::from(ConsoleArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConsoleConfig::default();
        assert!(config.backend_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.use_color);
    }

    #[test]
    fn args_override_defaults() {
        let args = ConsoleArgs {
            backend: Some("http://10.0.0.5:8000".to_string()),
            timeout: Some(5),
            no_color: true,
        };
        let config = ConsoleConfig::from(args);
        assert_eq!(config.backend_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.use_color);
    }
}
