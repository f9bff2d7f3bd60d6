//! Suite configuration
//!
//! The targets are externally owned, so everything that identifies them is
//! configuration: literal defaults overridable through `KINOPROBE_*`
//! environment variables. The API token has no usable default and must be
//! supplied for live runs.

use std::env;
use std::time::Duration;

/// Public base URL of the movie database service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.kinopoisk.dev";

/// Public URL of the movie portal.
pub const DEFAULT_PORTAL_URL: &str = "https://www.kinopoisk.ru/";

/// WebDriver endpoint the UI suite connects to.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Configuration for the movie database API probes.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the service, without the version prefix.
    pub base_url: String,

    /// Value sent in the `X-API-KEY` header.
    pub token: String,
}

impl ApiConfig {
    /// Build a config from `KINOPROBE_API_URL` / `KINOPROBE_API_TOKEN`,
    /// falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("KINOPROBE_API_URL", DEFAULT_API_BASE_URL),
            token: env_or("KINOPROBE_API_TOKEN", ""),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: String::new(),
        }
    }
}

/// Configuration for the portal browser session.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// WebDriver server to connect to (chromedriver, selenium, ...).
    pub webdriver_url: String,

    /// Portal URL every UI case starts from.
    pub portal_url: String,

    /// Implicit wait applied to element lookups.
    pub implicit_wait: Duration,

    /// Bound for explicit waits (element presence, title, navigation).
    pub wait_timeout: Duration,
}

impl BrowserConfig {
    /// Build a config from `KINOPROBE_WEBDRIVER_URL` /
    /// `KINOPROBE_PORTAL_URL`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            webdriver_url: env_or("KINOPROBE_WEBDRIVER_URL", DEFAULT_WEBDRIVER_URL),
            portal_url: env_or("KINOPROBE_PORTAL_URL", DEFAULT_PORTAL_URL),
            ..Self::default()
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            implicit_wait: Duration::from_secs(10),
            wait_timeout: Duration::from_secs(10),
        }
    }
}
