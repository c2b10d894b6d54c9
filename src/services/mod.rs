//! Typed service façade over the AliExpress Open Platform.
//!
//! [`AliexpressApi`] owns the configuration and one [`HttpClient`]. Every
//! operation builds an [`ApiRequest`], dispatches it, unwraps the response
//! envelope with the endpoint's response key and binds the payload to a
//! typed record from [`crate::models`].
//!
//! Operations are grouped by product line:
//!
//! - OAuth: [`AliexpressApi::generate_access_token`],
//!   [`AliexpressApi::refresh_access_token`]
//! - Affiliate: links, product searches, smart match, order list
//! - Common: product details, categories, buyer freight
//! - Dropshipping: product detail, orders, image and text search, order
//!   creation, freight and tracking
//!
//! # Example
//!
//! ```rust,ignore
//! use aliexpress_api::{AliexpressApi, AliexpressConfig, AppKey, AppSecret};
//! use aliexpress_api::services::ProductQuery;
//!
//! let config = AliexpressConfig::builder()
//!     .app_key(AppKey::new("502123")?)
//!     .app_secret(AppSecret::new("secret")?)
//!     .tracking_id("my_tracking_id")
//!     .build()?;
//! let api = AliexpressApi::new(config);
//!
//! let page = api
//!     .get_products(ProductQuery {
//!         keywords: Some("wireless earbuds".to_string()),
//!         ..ProductQuery::default()
//!     })
//!     .await?;
//! ```

mod affiliate;
mod common;
mod dropshipping;
mod errors;
mod oauth;
mod params;

use serde_json::Value;

use crate::clients::endpoints::response_key;
use crate::clients::envelope::unwrap_envelope;
use crate::clients::{ApiRequest, HttpClient};
use crate::config::AliexpressConfig;
use crate::models::{Category, FromPayload};

pub use affiliate::extract_product_id;
pub use errors::ServiceError;
pub use params::{
    DropshipperRegistration, DsOrderQuery, DsOrderRequest, DsProductQuery, FeedItemsQuery,
    FreightQuery, ImageSearchQuery, OrderListQuery, ProductQuery, RecommendFeedQuery,
    SmartMatchQuery, TextSearchQuery,
};

/// Client for the affiliate and dropshipping APIs.
///
/// Holds an in-memory cache of affiliate categories, filled by
/// [`get_categories`](Self::get_categories); operations that read or fill
/// the cache take `&mut self`.
#[derive(Debug)]
pub struct AliexpressApi {
    config: AliexpressConfig,
    client: HttpClient,
    categories: Option<Vec<Category>>,
}

impl AliexpressApi {
    /// Creates a client from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created; see [`HttpClient::new`].
    #[must_use]
    pub fn new(config: AliexpressConfig) -> Self {
        let client = HttpClient::new(&config);
        Self {
            config,
            client,
            categories: None,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &AliexpressConfig {
        &self.config
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the cached categories, if [`get_categories`](Self::get_categories)
    /// has been called.
    #[must_use]
    pub fn cached_categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    /// The configured access token, attached to session-scoped calls.
    fn session(&self) -> Option<&str> {
        self.config.access_token().map(AsRef::as_ref)
    }

    fn locale(&self, country_code: Option<&str>) -> String {
        self.config.locale(country_code)
    }

    /// Dispatches `request` and returns the unwrapped payload.
    async fn dispatch(
        &self,
        request: ApiRequest,
        access_token: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let key = response_key(&request.endpoint);
        let raw = self.client.execute(request, access_token).await?;
        Ok(unwrap_envelope(raw, &key)?)
    }

    /// Dispatches `request` and binds the payload to `T`.
    async fn call<T: FromPayload>(
        &self,
        request: ApiRequest,
        access_token: Option<&str>,
    ) -> Result<T, ServiceError> {
        let payload = self.dispatch(request, access_token).await?;
        Ok(T::from_payload(&payload))
    }
}

// Verify AliexpressApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AliexpressApi>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiHost, AppKey, AppSecret};

    pub(super) fn test_config(host: &str) -> AliexpressConfig {
        AliexpressConfig::builder()
            .app_key(AppKey::new("12345678").unwrap())
            .app_secret(AppSecret::new("helloworld").unwrap())
            .api_host(ApiHost::new(host).unwrap())
            .tracking_id("default")
            .access_token(AccessToken::new("session-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_api_has_empty_cache() {
        let api = AliexpressApi::new(test_config("https://api-sg.aliexpress.com"));
        assert!(api.cached_categories().is_none());
        assert_eq!(api.session(), Some("session-token"));
        assert_eq!(api.locale(Some("br")), "en_BR");
    }
}
