//! Probe configuration
//!
//! Endpoints, timeouts and the client identity used for every request
//! issued during a check.

use std::time::Duration;

/// Base URL of the Cinemeta catalog service
pub const DEFAULT_CATALOG_URL: &str = "https://v3-cinemeta.strem.io";

/// Timeout for each catalog request (milliseconds)
pub const DEFAULT_CATALOG_TIMEOUT_MS: u64 = 15_000;

/// Timeout for addon meta requests (milliseconds)
pub const DEFAULT_META_TIMEOUT_MS: u64 = 15_000;

/// Timeout for addon stream requests (milliseconds)
pub const DEFAULT_STREAM_TIMEOUT_MS: u64 = 30_000;

/// Maximum number of redirects followed by catalog requests
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Settings for a single addon check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Base URL of the metadata catalog service
    pub catalog_url: String,
    /// Value sent in the `User-Agent` header
    pub user_agent: String,
    /// Timeout for each catalog fetch
    pub catalog_timeout: Duration,
    /// Timeout for the addon meta query
    pub meta_timeout: Duration,
    /// Timeout for each addon stream query
    pub stream_timeout: Duration,
    /// Redirect limit for catalog fetches
    pub max_redirects: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            user_agent: default_user_agent(),
            catalog_timeout: Duration::from_millis(DEFAULT_CATALOG_TIMEOUT_MS),
            meta_timeout: Duration::from_millis(DEFAULT_META_TIMEOUT_MS),
            stream_timeout: Duration::from_millis(DEFAULT_STREAM_TIMEOUT_MS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// The identifying client header sent to catalogs and addons
pub fn default_user_agent() -> String {
    format!("addon-probe/{}", env!("CARGO_PKG_VERSION"))
}

/// Strips trailing slashes so paths can be appended with a single `/`
pub(crate) fn trim_base_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}
