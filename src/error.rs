use thiserror::Error;

/// Failures talking to the news API.
///
/// A rejected login is not an error here: the server answered, and the answer is
/// carried by [`crate::api::LoginOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The browser rejected the request before any response arrived
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status where a payload was required
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The response body was not the JSON shape we expected
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A browser API needed for the request was unavailable
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

/// Invalid startup configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,

    #[error("API base URL must start with http://, https:// or /, got {0:?}")]
    UnsupportedScheme(String),

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}
