// Run configuration for the storefront flows
//
// Defaults point at the public practice shop. Every field can be overridden
// through the builder methods or through STOREFRONT_* environment variables.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

/// Default URL of the client web application (landing/login screen)
pub const DEFAULT_CLIENT_URL: &str = "https://rahulshettyacademy.com/client";

/// Default base URL of the shop's HTTP API
pub const DEFAULT_API_BASE_URL: &str = "https://rahulshettyacademy.com";

/// Default location of the credentials document
pub const DEFAULT_CREDENTIALS_PATH: &str = "data/credentials.json";

/// Environment variable overriding [`FlowConfig::client_url`]
pub const ENV_CLIENT_URL: &str = "STOREFRONT_CLIENT_URL";
/// Environment variable overriding [`FlowConfig::api_base_url`]
pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
/// Environment variable overriding [`FlowConfig::browser`]
pub const ENV_BROWSER: &str = "STOREFRONT_BROWSER";
/// Environment variable overriding [`FlowConfig::headless`]
pub const ENV_HEADLESS: &str = "STOREFRONT_HEADLESS";
/// Environment variable overriding [`FlowConfig::credentials_path`]
pub const ENV_CREDENTIALS: &str = "STOREFRONT_CREDENTIALS";

/// Browser used for a run.
///
/// `Chrome` is branded Google Chrome (Chromium engine, `chrome` channel).
/// Unrecognized names fall back to bundled Chromium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserName {
    #[default]
    Chrome,
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserName {
    /// Returns the name as used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserName::Chrome => "chrome",
            BrowserName::Chromium => "chromium",
            BrowserName::Firefox => "firefox",
            BrowserName::Webkit => "webkit",
        }
    }
}

impl FromStr for BrowserName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "chrome" => BrowserName::Chrome,
            "firefox" => BrowserName::Firefox,
            "webkit" => BrowserName::Webkit,
            _ => BrowserName::Chromium,
        })
    }
}

impl fmt::Display for BrowserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shared by the page objects, the API helper and the browser session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowConfig {
    /// URL the login page navigates to
    pub client_url: String,

    /// Base URL the API helper resolves its endpoints against
    pub api_base_url: String,

    /// Browser to launch
    pub browser: BrowserName,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Path of the credentials JSON document
    pub credentials_path: PathBuf,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            client_url: DEFAULT_CLIENT_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            browser: BrowserName::default(),
            headless: true,
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

impl FlowConfig {
    /// Creates a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from defaults overridden by `STOREFRONT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a configuration from defaults overridden by values returned from `lookup`.
    ///
    /// `lookup` receives the environment variable names listed in this module.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_CLIENT_URL) {
            config.client_url = url;
        }
        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = url;
        }
        if let Some(name) = lookup(ENV_BROWSER) {
            // Infallible: unknown names select Chromium
            config.browser = name.parse().unwrap_or_default();
        }
        if let Some(value) = lookup(ENV_HEADLESS) {
            config.headless = parse_bool(ENV_HEADLESS, &value)?;
        }
        if let Some(path) = lookup(ENV_CREDENTIALS) {
            config.credentials_path = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the client application URL
    pub fn client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = url.into();
        self
    }

    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the browser to launch
    pub fn browser(mut self, browser: BrowserName) -> Self {
        self.browser = browser;
        self
    }

    /// Run headless or headed
    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    /// Set the credentials document path
    pub fn credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = path.into();
        self
    }

    /// Checks that both URLs parse.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.client_url)
            .map_err(|e| Error::Config(format!("client_url '{}': {}", self.client_url, e)))?;
        Url::parse(&self.api_base_url)
            .map_err(|e| Error::Config(format!("api_base_url '{}': {}", self.api_base_url, e)))?;
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
