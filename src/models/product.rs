//! Affiliate product records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A product as returned by the affiliate product, hot product, smart
/// match and product detail queries.
///
/// Prices are kept as the provider's decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "lenient::string")]
    pub app_sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub app_sale_price_currency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub commission_rate: String,
    #[serde(deserialize_with = "lenient::string")]
    pub discount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub evaluate_rate: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub first_level_category_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub first_level_category_name: String,
    /// Recent sales volume (the provider's spelling).
    #[serde(deserialize_with = "lenient::integer")]
    pub lastest_volume: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub hot_product_commission_rate: String,
    #[serde(deserialize_with = "lenient::string")]
    pub original_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub original_price_currency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_detail_url: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub product_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub product_main_image_url: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub product_small_image_urls: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub product_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_video_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub promotion_link: String,
    #[serde(deserialize_with = "lenient::string")]
    pub relevant_market_commission_rate: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sale_price_currency: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub second_level_category_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub second_level_category_name: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub shop_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub shop_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_app_sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_app_sale_price_currency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_original_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_original_price_currency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_sale_price_currency: String,
}

/// A page of products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductsResponse {
    #[serde(deserialize_with = "lenient::integer")]
    pub current_page_no: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub products: Vec<Product>,
}

/// Hot product and smart match queries share the product page layout.
pub type HotProductsResponse = ProductsResponse;
