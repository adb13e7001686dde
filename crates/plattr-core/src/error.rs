//! Error types for configuration validation.
//!
//! The resolvers are total and never return errors; only loading and
//! validating configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backend base URL is not a parseable absolute URL.
    #[error("invalid API base URL {value:?}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The backend base URL parsed but is not http/https.
    #[error("API base URL {value:?} must use http or https, got {scheme:?}")]
    UnsupportedScheme { value: String, scheme: String },

    /// Port 0 cannot be used for the default loopback backend.
    #[error("api.dev_port must be non-zero")]
    ZeroPort,
}
