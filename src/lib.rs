//! # AliExpress API Rust SDK
//!
//! A Rust SDK for the AliExpress Open Platform, covering the affiliate and
//! dropshipping APIs.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AliexpressConfig`] and [`AliexpressConfigBuilder`]
//! - Validated newtypes for credentials and the gateway host
//! - HMAC-SHA256 request signing via [`auth::signature`]
//! - A dispatcher ([`HttpClient`]) that assembles system parameters, signs,
//!   and sends one HTTP round-trip per call
//! - Response envelope unwrapping via [`clients::envelope`]
//! - Lenient binding of payloads to typed records in [`models`]
//! - A typed façade, [`AliexpressApi`], for OAuth, affiliate and
//!   dropshipping operations
//!
//! ## Quick Start
//!
//! ```rust
//! use aliexpress_api::{AliexpressConfig, AppKey, AppSecret, Currency, Language};
//!
//! let config = AliexpressConfig::builder()
//!     .app_key(AppKey::new("your-app-key").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .language(Language::Fr)
//!     .currency(Currency::Eur)
//!     .tracking_id("your-tracking-id")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.locale(Some("fr")), "fr_FR");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use aliexpress_api::{AliexpressApi, LinkType};
//! use aliexpress_api::services::ProductQuery;
//!
//! let api = AliexpressApi::new(config);
//!
//! let links = api
//!     .get_affiliate_links(["https://www.aliexpress.com/item/1005001234567890.html"], LinkType::Normal)
//!     .await?;
//!
//! let page = api
//!     .get_hotproducts(ProductQuery {
//!         keywords: Some("phone case".to_string()),
//!         page_size: Some(20),
//!         ..ProductQuery::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Dropshipping
//!
//! Session-scoped dropshipping calls need an access token, obtained with
//! [`AliexpressApi::generate_access_token`] and set on the configuration:
//!
//! ```rust,ignore
//! use aliexpress_api::{AccessToken, AliexpressApi};
//! use aliexpress_api::services::DsProductQuery;
//!
//! let token = api.generate_access_token(&oauth_code, None).await?;
//!
//! let config = AliexpressConfig::builder()
//!     .app_key(app_key)
//!     .app_secret(app_secret)
//!     .access_token(AccessToken::new(token.access_token.unwrap_or_default())?)
//!     .build()?;
//! let api = AliexpressApi::new(config);
//!
//! let product = api.get_ds_product(DsProductQuery::new("1005001234567890", "US")).await?;
//! println!("{}", product.ae_item_base_info_dto.subject);
//! ```
//!
//! ## Lower-Level Dispatch
//!
//! Endpoints without a façade method can be called through the dispatcher
//! directly:
//!
//! ```rust,ignore
//! use aliexpress_api::clients::{endpoints, envelope, ApiRequest, HttpClient};
//!
//! let client = HttpClient::new(&config);
//! let request = ApiRequest::builder("aliexpress.ds.address.get")
//!     .param("locale", "en_US")
//!     .build()?;
//! let raw = client.execute(request, Some(token)).await?;
//! let payload = envelope::unwrap_envelope(
//!     raw,
//!     &endpoints::response_key("aliexpress.ds.address.get"),
//! )?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **No hidden retries**: Every call is exactly one HTTP round-trip
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export public types at crate root for convenience
pub use auth::signature::SignMethod;
pub use config::{
    AccessToken, AliexpressConfig, AliexpressConfigBuilder, ApiHost, AppKey, AppSecret, Currency,
    Language, LinkType, ProductType, SortBy,
};
pub use error::ConfigError;

// Re-export dispatcher types
pub use clients::{
    ApiError, ApiRequest, ApiRequestBuilder, FileItem, HttpClient, InvalidApiRequestError,
    ProviderError, ResponseShapeError, TransportError,
};

// Re-export the service façade
pub use services::{AliexpressApi, ServiceError};
