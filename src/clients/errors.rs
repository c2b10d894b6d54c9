//! Error types for dispatching and interpreting API calls.
//!
//! # Error Handling
//!
//! - [`TransportError`]: the HTTP exchange itself failed (connection error,
//!   timeout, non-2xx status)
//! - [`ProviderError`]: the provider explicitly rejected the call, either
//!   through a top-level `error_response` or an error code inside the
//!   response envelope
//! - [`ResponseShapeError`]: a successful response could not be interpreted
//! - [`InvalidApiRequestError`]: a request descriptor failed validation
//!   before anything was sent
//! - [`ApiError`]: unified error type encompassing all of the above
//!
//! None of these are retried by the SDK.
//!
//! # Example
//!
//! ```rust,ignore
//! use aliexpress_api::clients::ApiError;
//!
//! match client.execute(request, None).await {
//!     Ok(body) => println!("{body}"),
//!     Err(ApiError::Transport(e)) => println!("HTTP failure: {e}"),
//!     Err(ApiError::Provider(e)) => println!("rejected {}: {}", e.code, e.message),
//!     Err(ApiError::ResponseShape(e)) => println!("unexpected response: {e}"),
//!     Err(ApiError::InvalidRequest(e)) => println!("bad request: {e}"),
//! }
//! ```

use thiserror::Error;

/// The HTTP exchange failed.
///
/// `status` is `None` when no response was received at all (connection
/// failure, timeout, TLS error).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", match .status {
    Some(status) => format!("HTTP {status}: {}", .message),
    None => format!("Transport failure: {}", .message),
})]
pub struct TransportError {
    /// HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// Human-readable description of the failure.
    pub message: String,
    /// Raw response body, when one was received.
    pub body: Option<String>,
}

/// The provider rejected the call.
///
/// Carries the provider's own error code and message. Values taken from a
/// top-level `error_response` additionally carry `sub_code`/`sub_msg` and
/// the routing hosts reported in the response headers.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::clients::ProviderError;
///
/// let error = ProviderError::new("15", "Remote service error");
/// assert_eq!(error.to_string(), "API Error 15: Remote service error");
/// ```
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("API Error {code}: {message}")]
pub struct ProviderError {
    /// Provider error code (e.g. `IncompleteSignature`, `15`).
    pub code: String,
    /// Provider error message.
    pub message: String,
    /// Detailed error code, when provided.
    pub sub_code: Option<String>,
    /// Detailed error message, when provided.
    pub sub_msg: Option<String>,
    /// Value of the `Application-Host` response header.
    pub application_host: Option<String>,
    /// Value of the `Location-Host` response header.
    pub service_host: Option<String>,
    /// Provider request id, when provided.
    pub request_id: Option<String>,
}

impl ProviderError {
    /// Creates a provider error from a code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Self::default()
        }
    }
}

/// A successful response could not be interpreted.
///
/// This signals a mismatch between the SDK and the provider's response
/// contract rather than a business condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseShapeError {
    /// The expected response key is absent.
    #[error("Response key '{key}' not found. Available: {available:?}")]
    MissingKey {
        /// The response key that was expected.
        key: String,
        /// The top-level keys that were present.
        available: Vec<String>,
    },

    /// The response body is not a JSON object.
    #[error("Response body is not a JSON object: {snippet}")]
    NotAnObject {
        /// The start of the offending body.
        snippet: String,
    },

    /// The value under the response key is not a JSON object.
    #[error("Value under '{key}' is not a JSON object")]
    InvalidEnvelope {
        /// The response key whose value was malformed.
        key: String,
    },
}

/// A request descriptor failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidApiRequestError {
    /// The endpoint name is empty.
    #[error("Cannot build a request without an endpoint name.")]
    MissingEndpoint,

    /// Two fields or files are sent under the same wire name.
    #[error("Parameter '{name}' is declared more than once.")]
    DuplicateParameter {
        /// The conflicting parameter name.
        name: String,
    },

    /// A parameter collides with a reserved system parameter.
    #[error("Parameter '{name}' is reserved for system use.")]
    ReservedParameter {
        /// The reserved parameter name.
        name: String,
    },
}

/// Unified error type for dispatching and unwrapping API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider rejected the call.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The response could not be interpreted.
    #[error(transparent)]
    ResponseShape(#[from] ResponseShapeError),

    /// The request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidApiRequestError),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("Request timed out: {error}")
        } else if error.is_connect() {
            format!("Connection failed: {error}")
        } else {
            format!("Network error: {error}")
        };
        Self {
            status: error.status().map(|s| s.as_u16()),
            message,
            body: None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_message_includes_status() {
        let error = TransportError {
            status: Some(500),
            message: "Internal Server Error".to_string(),
            body: Some("oops".to_string()),
        };
        assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_transport_error_without_status() {
        let error = TransportError {
            status: None,
            message: "Request timed out".to_string(),
            body: None,
        };
        assert!(error.to_string().starts_with("Transport failure"));
    }

    #[test]
    fn test_provider_error_message() {
        let error = ProviderError {
            sub_code: Some("isv.invalid-parameter".to_string()),
            ..ProviderError::new("IncompleteSignature", "The request signature does not conform")
        };
        assert_eq!(
            error.to_string(),
            "API Error IncompleteSignature: The request signature does not conform"
        );
        assert_eq!(error.sub_code.as_deref(), Some("isv.invalid-parameter"));
    }

    #[test]
    fn test_missing_key_lists_available_keys() {
        let error = ResponseShapeError::MissingKey {
            key: "foo_response".to_string(),
            available: vec!["bar".to_string()],
        };
        let message = error.to_string();
        assert!(message.contains("foo_response"));
        assert!(message.contains("bar"));
    }

    #[test]
    fn test_api_error_is_transparent() {
        let error: ApiError = ProviderError::new("15", "boom").into();
        assert_eq!(error.to_string(), "API Error 15: boom");
        assert!(matches!(error, ApiError::Provider(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &ProviderError::new("1", "x");
        let _: &dyn std::error::Error = &InvalidApiRequestError::MissingEndpoint;
        let _: &dyn std::error::Error = &ResponseShapeError::NotAnObject {
            snippet: String::new(),
        };
    }
}
