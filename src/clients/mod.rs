//! Request dispatch for the AliExpress Open Platform.
//!
//! This module provides the layer between the typed service façade and the
//! wire: request descriptors, the signing dispatcher, the response envelope
//! unwrapper and the error taxonomy they share.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiRequest`]: Endpoint name plus application parameters and files
//! - [`HttpClient`]: Signs and sends an [`ApiRequest`], returning raw JSON
//! - [`envelope::unwrap_envelope`]: Extracts the payload from a response
//! - [`endpoints`]: Endpoint names and response key derivation
//! - [`ApiError`]: Unified error for all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use aliexpress_api::clients::{endpoints, envelope, ApiRequest, HttpClient};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = ApiRequest::builder(endpoints::DS_PRODUCT_GET)
//!     .param("product_id", "1005001234567890")
//!     .param("ship_to_country", "US")
//!     .build()?;
//!
//! let raw = client.execute(request, Some(token)).await?;
//! let payload = envelope::unwrap_envelope(
//!     raw,
//!     &endpoints::response_key(endpoints::DS_PRODUCT_GET),
//! )?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A failed call surfaces immediately; retry policy belongs to the
//! caller.

mod api_request;
pub mod endpoints;
pub mod envelope;
mod errors;
mod http_client;

pub use api_request::{ApiRequest, ApiRequestBuilder, FileItem, SYSTEM_PARAMS};
pub use errors::{
    ApiError, InvalidApiRequestError, ProviderError, ResponseShapeError, TransportError,
};
pub use http_client::{HttpClient, REST_PATH, SDK_VERSION, SYNC_PATH};
