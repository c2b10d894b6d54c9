//! Parameter sets for the service operations.
//!
//! Fields left as `None` (or empty lists) are omitted from the request.
//! Language, currency and locale fall back to the client configuration.

use serde_json::{Map, Value};

use crate::config::{Currency, Language, ProductType, SortBy};

/// Filters for the affiliate product and hot product queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category_ids: Vec<String>,
    pub delivery_days: Option<u32>,
    pub fields: Vec<String>,
    pub keywords: Option<String>,
    /// Upper price bound, in cents.
    pub max_sale_price: Option<u64>,
    /// Lower price bound, in cents.
    pub min_sale_price: Option<u64>,
    pub page_no: Option<u32>,
    /// Products per page (1-50).
    pub page_size: Option<u32>,
    pub platform_product_type: Option<ProductType>,
    pub ship_to_country: Option<String>,
    pub sort: Option<SortBy>,
}

/// Parameters for `aliexpress.affiliate.product.smartmatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmartMatchQuery {
    /// Unique device id; required by the provider.
    pub device_id: String,
    pub app: Option<String>,
    pub country: Option<String>,
    pub device: Option<String>,
    pub fields: Vec<String>,
    pub keywords: Option<String>,
    pub page_no: Option<u32>,
    pub product_id: Option<String>,
    pub site: Option<String>,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    /// Overrides the configured tracking id.
    pub tracking_id: Option<String>,
    pub user: Option<String>,
}

impl SmartMatchQuery {
    /// Creates a query for `device_id` with everything else unset.
    #[must_use]
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            ..Self::default()
        }
    }
}

/// Parameters for `aliexpress.affiliate.order.list`.
///
/// Times use the provider's `YYYY-MM-DD HH:MM:SS` format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListQuery {
    /// Order status filter, e.g. `Payment Completed`.
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub fields: Vec<String>,
    /// Locale site such as `ru_site`; defaults to the configured locale.
    pub locale_site: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

/// Parameters for `aliexpress.ds.product.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DsProductQuery {
    pub product_id: String,
    pub ship_to_country: String,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub remove_personal_benefit: Option<bool>,
    pub biz_model: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    /// Defaults to the configured language in `ship_to_country`.
    pub locale: Option<String>,
}

impl DsProductQuery {
    /// Creates a query for one product shipped to `ship_to_country`.
    #[must_use]
    pub fn new(product_id: impl Into<String>, ship_to_country: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            ship_to_country: ship_to_country.into(),
            ..Self::default()
        }
    }
}

/// Contact details for `aliexpress.ds.dropshipper.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropshipperRegistration {
    pub email: String,
    pub mobile: Option<String>,
    pub app_name: Option<String>,
    pub country: Option<String>,
    pub locale: Option<String>,
    pub platform: Option<String>,
}

/// Time window for the dropshipping order and commission order lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DsOrderQuery {
    pub start_time: String,
    pub end_time: String,
    /// Only sent by the order list; commission orders have no status filter.
    pub status: Option<String>,
    pub fields: Vec<String>,
    pub locale: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

/// An image search through `aliexpress.ds.image.searchV2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchQuery {
    /// Raw image file contents.
    pub image: Vec<u8>,
    /// Upload file name reported in the multipart part.
    pub filename: String,
    /// `default`, `min_price`, `max_price`, `sales` or `last_volume`.
    pub sort: String,
    /// `0` searches by image, `1` searches for similar products.
    pub search_type: u8,
    /// Number of results (1-50).
    pub limit: u32,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
}

impl ImageSearchQuery {
    /// Creates an image search with the provider's defaults.
    #[must_use]
    pub fn new(image: impl Into<Vec<u8>>) -> Self {
        Self {
            image: image.into(),
            filename: "image.jpg".to_string(),
            sort: "default".to_string(),
            search_type: 0,
            limit: 20,
            target_currency: None,
            target_language: None,
        }
    }
}

/// Parameters for `aliexpress.ds.recommend.feed.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendFeedQuery {
    pub feed_name: Option<String>,
    pub country: Option<String>,
    pub fields: Vec<String>,
    pub locale: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub web_site: Option<String>,
}

/// An order to place through `aliexpress.ds.order.create`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DsOrderRequest {
    /// Recipient address fields (`address`, `city`, `country`, ...).
    pub logistics_address: Map<String, Value>,
    /// One object per line item (`product_id`, `sku_attr`, ...).
    pub product_items: Vec<Value>,
    /// Written into the address when it has no `locale` of its own.
    pub locale: Option<String>,
    /// Caller order id for idempotent checkout.
    pub out_order_id: Option<String>,
    pub ds_extend_params: Option<Value>,
}

/// Parameters for `aliexpress.ds.freight.query`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreightQuery {
    pub product_id: String,
    pub sku_id: String,
    pub country_code: String,
    pub quantity: u32,
    pub locale: Option<String>,
    pub currency: Option<Currency>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub language: Option<Language>,
}

/// Parameters for `aliexpress.ds.feed.itemids.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItemsQuery {
    pub feed_name: String,
    pub locale: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
    pub web_site: Option<String>,
}

/// Parameters for `aliexpress.ds.text.search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearchQuery {
    pub keywords: String,
    pub country: String,
    pub category_ids: Vec<String>,
    pub locale: Option<String>,
    pub sort: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}
