//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Address, asset paths and the like come from Leptos' own configuration.

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public URL of the site, reported at startup
    /// Example: https://softsell.example.com
    pub site_url: Option<String>,

    /// `tracing` filter directive
    /// Example: info,softsell=debug
    pub log_filter: String,

    /// Compress responses (br/gzip/deflate/zstd)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            log_filter: std::env::var("RUST_LOG")
                .ok()
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            compression: std::env::var("SOFTSELL_COMPRESSION")
                .map(|value| parse_flag(&value))
                .unwrap_or(true),
        }
    }

    /// Check if a public URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Anything except `0`, `false`, `off` or `no` turns a flag on
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
