//! Startup configuration.
//!
//! The API base URL is resolved once in [`crate::run`] and handed to the root
//! component; nothing reads it from a global afterwards.

use std::str::FromStr;

use crate::error::ConfigError;

/// Where the API lives when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// `<meta name="...">` consulted at runtime for a base URL override.
pub const BASE_URL_META_NAME: &str = "api-base-url";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: String,
    log_level: log::Level,
}

impl AppConfig {
    /// Build a config from an explicit base URL, using the default log level.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            log_level: default_log_level(),
        })
    }

    /// Replace the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }

    /// Resolve the config from the build environment and the host page.
    ///
    /// Order, later wins: built-in default, `NEWSDESK_API_BASE_URL` at build time,
    /// the `api-base-url` meta tag of the page.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(
            option_env!("NEWSDESK_API_BASE_URL"),
            document_base_url().as_deref(),
            option_env!("NEWSDESK_LOG_LEVEL"),
        )
    }

    /// Layer the configuration sources without touching the environment.
    pub fn resolve(
        build_base_url: Option<&str>,
        page_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base_url = page_base_url
            .filter(|url| !url.trim().is_empty())
            .or(build_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL);

        let config = Self::new(base_url)?;
        match log_level {
            Some(level) => Ok(config.with_log_level(parse_log_level(level)?)),
            None => Ok(config),
        }
    }

    /// Root address of the API, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub const fn log_level(&self) -> log::Level {
        self.log_level
    }

    /// `POST` target for credential checks.
    pub fn login_url(&self) -> String {
        format!("{}/users/login", self.api_base_url)
    }

    /// `GET` target listing the articles of one category.
    pub fn articles_url(&self, category: &str) -> String {
        format!(
            "{}/articles/{}",
            self.api_base_url,
            urlencoding::encode(category)
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: default_log_level(),
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        // A lone "/" means same-origin root
        if raw.trim().starts_with('/') {
            return Ok(String::new());
        }
        return Err(ConfigError::EmptyBaseUrl);
    }

    let supported = trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with('/');
    if !supported {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    log::Level::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))
}

const fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Read the base URL override from the host page, if any.
fn document_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{BASE_URL_META_NAME}\"]");
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
