//! Affiliate operations.

use crate::clients::endpoints;
use crate::clients::ApiRequest;
use crate::config::LinkType;
use crate::models::{
    AffiliateLink, AffiliateLinksResponse, HotProductsResponse, OrderListResponse,
    ProductsResponse,
};

use super::{AliexpressApi, OrderListQuery, ProductQuery, ServiceError, SmartMatchQuery};

impl AliexpressApi {
    /// Converts product URLs into affiliate promotion links.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingTrackingId`] if no tracking id is
    /// configured, or [`ServiceError::Api`] if the call fails.
    pub async fn get_affiliate_links<I, S>(
        &self,
        links: I,
        link_type: LinkType,
    ) -> Result<Vec<AffiliateLink>, ServiceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tracking_id = self
            .config
            .tracking_id()
            .ok_or(ServiceError::MissingTrackingId)?;

        let request = ApiRequest::builder(endpoints::AFFILIATE_LINK_GENERATE)
            .param_list("source_values", links)
            .param("promotion_link_type", link_type)
            .param("tracking_id", tracking_id)
            .build()?;

        let response: AffiliateLinksResponse = self.call(request, None).await?;
        Ok(response.promotion_links)
    }

    /// Queries hot products (higher commission).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ProductsNotFound`] if the page is empty, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn get_hotproducts(
        &self,
        query: ProductQuery,
    ) -> Result<HotProductsResponse, ServiceError> {
        let request = self.product_query(endpoints::AFFILIATE_HOTPRODUCT_QUERY, query)?;
        let response: HotProductsResponse = self.call(request, None).await?;
        non_empty_products(response)
    }

    /// Searches affiliate products.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ProductsNotFound`] if the page is empty, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn get_products(&self, query: ProductQuery) -> Result<ProductsResponse, ServiceError> {
        let request = self.product_query(endpoints::AFFILIATE_PRODUCT_QUERY, query)?;
        let response: ProductsResponse = self.call(request, None).await?;
        non_empty_products(response)
    }

    /// Recommends products for a device, user or product.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ProductsNotFound`] if the page is empty, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn smart_match_product(
        &self,
        query: SmartMatchQuery,
    ) -> Result<HotProductsResponse, ServiceError> {
        let currency = query.target_currency.unwrap_or(self.config.currency());
        let language = query
            .target_language
            .map_or_else(|| self.config.target_language(), |l| l.code().to_ascii_lowercase());
        let tracking_id = query
            .tracking_id
            .or_else(|| self.config.tracking_id().map(str::to_string));

        let request = ApiRequest::builder(endpoints::AFFILIATE_PRODUCT_SMARTMATCH)
            .param_opt("app", query.app)
            .param_opt("country", query.country)
            .param_opt("device", query.device)
            .param("device_id", query.device_id)
            .param_list("fields", query.fields)
            .param_opt("keywords", query.keywords)
            .param_opt("page_no", query.page_no)
            .param_opt("product_id", query.product_id)
            .param_opt("site", query.site)
            .param("target_currency", currency)
            .param("target_language", language)
            .param_opt("tracking_id", tracking_id)
            .param_opt("user", query.user)
            .build()?;

        let response: HotProductsResponse = self.call(request, None).await?;
        non_empty_products(response)
    }

    /// Lists orders attributed to the affiliate account.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::OrdersNotFound`] if the page is empty, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn get_order_list(
        &self,
        query: OrderListQuery,
    ) -> Result<OrderListResponse, ServiceError> {
        let locale_site = query.locale_site.unwrap_or_else(|| self.locale(None));

        let request = ApiRequest::builder(endpoints::AFFILIATE_ORDER_LIST)
            .param("start_time", query.start_time)
            .param("end_time", query.end_time)
            .param_list("fields", query.fields)
            .param("locale_site", locale_site)
            .param_opt("page_no", query.page_no)
            .param_opt("page_size", query.page_size)
            .param("status", query.status)
            .build()?;

        let response: OrderListResponse = self.call(request, None).await?;
        if response.current_record_count > 0 {
            Ok(response)
        } else {
            Err(ServiceError::OrdersNotFound)
        }
    }

    /// Builds a product or hot product query with the configured currency,
    /// language and tracking id.
    fn product_query(
        &self,
        endpoint: &str,
        query: ProductQuery,
    ) -> Result<ApiRequest, ServiceError> {
        Ok(ApiRequest::builder(endpoint)
            .param_list("category_ids", query.category_ids)
            .param_opt("delivery_days", query.delivery_days)
            .param_list("fields", query.fields)
            .param_opt("keywords", query.keywords)
            .param_opt("max_sale_price", query.max_sale_price)
            .param_opt("min_sale_price", query.min_sale_price)
            .param_opt("page_no", query.page_no)
            .param_opt("page_size", query.page_size)
            .param_opt("platform_product_type", query.platform_product_type)
            .param_opt("ship_to_country", query.ship_to_country)
            .param_opt("sort", query.sort)
            .param("target_currency", self.config.currency())
            .param("target_language", self.config.target_language())
            .param_opt("tracking_id", self.config.tracking_id())
            .build()?)
    }
}

fn non_empty_products(response: ProductsResponse) -> Result<ProductsResponse, ServiceError> {
    if response.current_record_count > 0 {
        Ok(response)
    } else {
        Err(ServiceError::ProductsNotFound)
    }
}

/// Extracts a product id from a bare id or an item URL.
///
/// Accepts an all-digit id or a URL with an `/item/<id>` path segment
/// (`/item/<id>.html` included). Short links, store pages and anything
/// else return `None`.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::services::extract_product_id;
///
/// assert_eq!(extract_product_id("1005001234567890").as_deref(), Some("1005001234567890"));
/// assert_eq!(
///     extract_product_id("https://www.aliexpress.com/item/1005001234567890.html?spm=a2g0o").as_deref(),
///     Some("1005001234567890")
/// );
/// assert_eq!(extract_product_id("https://s.click.aliexpress.com/e/_DmXyz9"), None);
/// ```
#[must_use]
pub fn extract_product_id(value: &str) -> Option<String> {
    let value = value.trim();
    if is_digits(value) {
        return Some(value.to_string());
    }

    let path = value.split(['?', '#']).next().unwrap_or(value);
    let (_, rest) = path.split_once("/item/")?;
    let segment = rest.split('/').next().unwrap_or(rest);
    let id = segment.strip_suffix(".html").unwrap_or(segment);
    is_digits(id).then(|| id.to_string())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
