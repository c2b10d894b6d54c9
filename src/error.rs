//! Configuration error types for the AliExpress API SDK.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or hosts are rejected before any request is signed.
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::{AppKey, ConfigError};
//!
//! let result = AppKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App key cannot be empty.
    #[error("App key cannot be empty. Please provide the app key issued by the AliExpress Open Platform.")]
    EmptyAppKey,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide the app secret issued by the AliExpress Open Platform.")]
    EmptyAppSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://api-sg.aliexpress.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A code (sign method, language, currency, ...) is not recognised.
    #[error("Unknown {kind} code '{value}'.")]
    UnknownCode {
        /// The kind of code being parsed.
        kind: &'static str,
        /// The value that was provided.
        value: String,
    },
}
