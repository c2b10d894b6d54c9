//! Request signing and OAuth token handling.
//!
//! - [`signature`]: canonical string construction and HMAC signing of
//!   system plus application parameters
//! - [`extract_token_payload`]: locates the token record in the body
//!   returned by `/auth/token/create` and `/auth/token/refresh`
//!
//! Obtaining tokens is done through
//! [`AliexpressApi::generate_access_token`](crate::AliexpressApi::generate_access_token)
//! and [`AliexpressApi::refresh_access_token`](crate::AliexpressApi::refresh_access_token).
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::auth::signature::sign;
//!
//! let params = [("app_key", "12345678"), ("timestamp", "1700000000000")];
//! let signature = sign("helloworld", "aliexpress.affiliate.product.query", params);
//! assert_eq!(signature.len(), 64);
//! ```

pub mod signature;
mod token;

pub use token::{extract_token_payload, TOKEN_WRAPPER_KEYS};
