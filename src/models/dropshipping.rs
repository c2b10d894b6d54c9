//! Dropshipping records.
//!
//! The dropshipping endpoints report most identifiers as strings; they are
//! kept as strings here so that values round-trip unchanged into follow-up
//! calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

// ============================================================================
// Product detail (aliexpress.ds.product.get)
// ============================================================================

/// Basic information about an item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AeItemBaseInfoDto {
    #[serde(deserialize_with = "lenient::string")]
    pub subject: String,
    /// HTML description.
    #[serde(deserialize_with = "lenient::string")]
    pub detail: String,
    #[serde(deserialize_with = "lenient::string")]
    pub mobile_detail: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_status_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub currency_code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub avg_evaluation_rating: String,
    #[serde(deserialize_with = "lenient::string")]
    pub evaluation_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sales_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gmt_create: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gmt_modified: String,
    #[serde(deserialize_with = "lenient::string")]
    pub owner_member_seq_long: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub category_sequence: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub separated_listing: Option<String>,
}

/// A product attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ItemProperty {
    #[serde(deserialize_with = "lenient::string")]
    pub attr_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub attr_value: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub attr_name_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub attr_value_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub attr_value_unit: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub attr_value_start: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub attr_value_end: Option<String>,
}

/// One property of a SKU, such as colour or size.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AeSkuPropertyDto {
    #[serde(deserialize_with = "lenient::string")]
    pub sku_property_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_property_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub property_value_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub property_value_definition_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_property_value: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub sku_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WholesalePriceTier {
    #[serde(deserialize_with = "lenient::string")]
    pub min_quantity: String,
    #[serde(deserialize_with = "lenient::string")]
    pub wholesale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub discount: String,
}

/// A purchasable variant of an item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AeItemSkuInfoDto {
    #[serde(deserialize_with = "lenient::string")]
    pub sku_id: String,
    /// Property combination, e.g. `73:175#Black Green;71:193#Polarized`.
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub offer_sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub offer_bulk_sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_available_stock: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_bulk_order: String,
    #[serde(deserialize_with = "lenient::string")]
    pub currency_code: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub ean_code: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub barcode: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub price_include_tax: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub tax_amount: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub tax_currency_code: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub estimated_import_charges: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub limit_strategy: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub buy_amount_limit_set_by_promotion: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub sku_attr: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub ae_sku_property_dtos: Vec<AeSkuPropertyDto>,
    #[serde(deserialize_with = "lenient::list")]
    pub wholesale_price_tiers: Vec<WholesalePriceTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LogisticsInfoDto {
    #[serde(deserialize_with = "lenient::string")]
    pub delivery_time: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ship_to_country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PackageInfoDto {
    #[serde(deserialize_with = "lenient::string")]
    pub package_length: String,
    #[serde(deserialize_with = "lenient::string")]
    pub package_width: String,
    #[serde(deserialize_with = "lenient::string")]
    pub package_height: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gross_weight: String,
    #[serde(deserialize_with = "lenient::string")]
    pub package_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_unit: String,
    #[serde(deserialize_with = "lenient::string")]
    pub base_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AeVideoDto {
    #[serde(deserialize_with = "lenient::string")]
    pub media_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub media_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub media_status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub media_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub poster_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ali_member_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AeMultimediaInfoDto {
    /// Semicolon-separated image URLs.
    #[serde(deserialize_with = "lenient::string")]
    pub image_urls: String,
    #[serde(deserialize_with = "lenient::list")]
    pub ae_video_dtos: Vec<AeVideoDto>,
}

impl AeMultimediaInfoDto {
    /// Splits [`Self::image_urls`] into individual URLs.
    #[must_use]
    pub fn image_url_list(&self) -> Vec<&str> {
        self.image_urls
            .split(';')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StoreInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub store_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub store_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub store_country_code: String,
    #[serde(deserialize_with = "lenient::string")]
    pub communication_rating: String,
    #[serde(deserialize_with = "lenient::string")]
    pub shipping_speed_rating: String,
    #[serde(deserialize_with = "lenient::string")]
    pub item_as_described_rating: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ManufacturerInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone_prefix: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country_name: String,
}

/// Mapping between a main product id and its sub-product ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductIdConverterResult {
    #[serde(deserialize_with = "lenient::string")]
    pub main_product_id: String,
    pub sub_product_id: Map<String, Value>,
}

/// Full product detail for a dropshipping account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsProductGetResult {
    #[serde(deserialize_with = "lenient::nested")]
    pub ae_item_base_info_dto: AeItemBaseInfoDto,
    #[serde(deserialize_with = "lenient::nested")]
    pub ae_multimedia_info_dto: AeMultimediaInfoDto,
    #[serde(deserialize_with = "lenient::list")]
    pub ae_item_sku_info_dtos: Vec<AeItemSkuInfoDto>,
    #[serde(deserialize_with = "lenient::nested")]
    pub package_info_dto: PackageInfoDto,
    #[serde(deserialize_with = "lenient::nested")]
    pub logistics_info_dto: LogisticsInfoDto,
    #[serde(deserialize_with = "lenient::nested")]
    pub ae_store_info: StoreInfo,
    #[serde(deserialize_with = "lenient::list")]
    pub ae_item_properties: Vec<ItemProperty>,
    #[serde(deserialize_with = "lenient::opt_nested")]
    pub manufacturer_info: Option<ManufacturerInfo>,
    #[serde(deserialize_with = "lenient::opt_nested")]
    pub product_id_converter_result: Option<ProductIdConverterResult>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub has_whole_sale: Option<String>,
}

// ============================================================================
// Categories (aliexpress.ds.category.get)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsCategory {
    #[serde(deserialize_with = "lenient::integer")]
    pub category_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub category_name: String,
    #[serde(deserialize_with = "lenient::opt_integer")]
    pub parent_category_id: Option<i64>,
    #[serde(deserialize_with = "lenient::list")]
    pub children: Vec<DsCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsCategoryGetResponse {
    #[serde(deserialize_with = "lenient::list")]
    pub categories: Vec<DsCategory>,
}

// ============================================================================
// Orders
// ============================================================================

/// A line item within a dropshipping order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsOrderProduct {
    #[serde(deserialize_with = "lenient::string")]
    pub product_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sku_info: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub product_count: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub product_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsOrder {
    #[serde(deserialize_with = "lenient::string")]
    pub order_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub order_status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gmt_create: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gmt_modified: String,
    #[serde(deserialize_with = "lenient::string")]
    pub total_amount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub product_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub order_products: Vec<DsOrderProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsOrderListResponse {
    #[serde(deserialize_with = "lenient::integer")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub orders: Vec<DsOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsCommissionOrder {
    #[serde(deserialize_with = "lenient::string")]
    pub order_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub commission_status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub commission_rate: String,
    #[serde(deserialize_with = "lenient::string")]
    pub commission_amount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub order_time: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub affiliate_order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsCommissionOrderListResponse {
    #[serde(deserialize_with = "lenient::integer")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub commission_orders: Vec<DsCommissionOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderLogisticsInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub logistics_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub logistics_company_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub logistics_status: String,
}

/// Detail of a single order, shared by the seller-side and buyer-side
/// order queries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsTradeOrderGetResponse {
    #[serde(deserialize_with = "lenient::string")]
    pub order_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub order_status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gmt_create: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gmt_modified: String,
    #[serde(deserialize_with = "lenient::string")]
    pub total_amount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub product_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub order_products: Vec<DsOrderProduct>,
    #[serde(deserialize_with = "lenient::list")]
    pub order_logistics_info: Vec<OrderLogisticsInfo>,
}

// ============================================================================
// Tracking (aliexpress.ds.order.tracking.get)
// ============================================================================

/// One scan event in a package's journey.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TrackingEvent {
    #[serde(deserialize_with = "lenient::integer")]
    pub time_stamp: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub event_desc: String,
    #[serde(deserialize_with = "lenient::string")]
    pub event_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
}

/// One shipped package.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TrackingPackage {
    #[serde(deserialize_with = "lenient::string")]
    pub carrier_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub mail_no: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub eta_time_stamps: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub detail_list: Vec<TrackingEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TrackingData {
    #[serde(deserialize_with = "lenient::list")]
    pub tracking_detail_line_list: Vec<TrackingPackage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DsOrderTrackingGetResponse {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub msg: Option<String>,
    #[serde(deserialize_with = "lenient::nested")]
    pub data: TrackingData,
}

// ============================================================================
// Text search (aliexpress.ds.text.search)
// ============================================================================

/// A search hit. The search endpoint uses camel-case keys.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DsSearchProduct {
    #[serde(deserialize_with = "lenient::string")]
    pub item_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub item_main_pic: String,
    #[serde(deserialize_with = "lenient::string")]
    pub item_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sale_price: String,
    #[serde(deserialize_with = "lenient::string")]
    pub sale_price_currency: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub original_price: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub original_price_currency: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub discount: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub evaluate_rate: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub orders: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub score: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DsTextSearchResult {
    #[serde(deserialize_with = "lenient::integer")]
    pub total_count: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub page_index: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub page_size: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub products: Vec<DsSearchProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FromPayload;
    use serde_json::json;

    #[test]
    fn test_product_get_result_binds_nested_sections() {
        let payload = json!({
            "ae_item_base_info_dto": {
                "subject": "Sports Watch",
                "product_id": 1_005_001_234_567_890_i64,
                "category_id": "200000297"
            },
            "ae_item_sku_info_dtos": {
                "ae_item_sku_info_d_t_o": [{
                    "sku_id": "12000023456789",
                    "offer_sale_price": "15.80",
                    "sku_available_stock": 120,
                    "ae_sku_property_dtos": {
                        "ae_sku_property_d_t_o": [{"sku_property_name": "Color", "sku_property_value": "Black"}]
                    }
                }]
            },
            "ae_multimedia_info_dto": {"image_urls": "https://a.jpg;https://b.jpg;"},
            "ae_store_info": {"store_id": 912_345, "store_name": "Watch Store"},
            "manufacturer_info": null,
            "has_whole_sale": false
        });

        let result = DsProductGetResult::from_payload(&payload);
        assert_eq!(result.ae_item_base_info_dto.subject, "Sports Watch");
        assert_eq!(result.ae_item_base_info_dto.product_id, "1005001234567890");
        assert_eq!(result.ae_item_sku_info_dtos.len(), 1);
        let sku = &result.ae_item_sku_info_dtos[0];
        assert_eq!(sku.sku_available_stock, "120");
        assert_eq!(sku.ae_sku_property_dtos[0].sku_property_value, "Black");
        assert_eq!(
            result.ae_multimedia_info_dto.image_url_list(),
            vec!["https://a.jpg", "https://b.jpg"]
        );
        assert_eq!(result.ae_store_info.store_id, "912345");
        assert!(result.manufacturer_info.is_none());
        assert_eq!(result.has_whole_sale.as_deref(), Some("false"));
    }

    #[test]
    fn test_category_tree_binds_children() {
        let payload = json!({
            "categories": {"category": [{
                "category_id": 3,
                "category_name": "Apparel",
                "children": [{"category_id": "200000345", "category_name": "Dresses", "parent_category_id": 3}]
            }]}
        });

        let response = DsCategoryGetResponse::from_payload(&payload);
        assert_eq!(response.categories.len(), 1);
        assert_eq!(response.categories[0].children[0].category_id, 200_000_345);
        assert_eq!(response.categories[0].children[0].parent_category_id, Some(3));
    }

    #[test]
    fn test_tracking_binds_packages_and_events() {
        let payload = json!({
            "code": "200",
            "msg": "OK",
            "data": {
                "tracking_detail_line_list": {
                    "tracking_detail": [{
                        "carrier_name": "AliExpress Standard Shipping",
                        "mail_no": "LP00123456789012",
                        "eta_time_stamps": "1700600000000",
                        "detail_list": {"detail": [
                            {"time_stamp": 1_700_000_000_000_i64, "event_name": "Accepted by carrier"}
                        ]}
                    }]
                }
            }
        });

        let tracking = DsOrderTrackingGetResponse::from_payload(&payload);
        assert_eq!(tracking.code.as_deref(), Some("200"));
        let package = &tracking.data.tracking_detail_line_list[0];
        assert_eq!(package.mail_no, "LP00123456789012");
        assert_eq!(package.eta_time_stamps, 1_700_600_000_000);
        assert_eq!(package.detail_list[0].event_name, "Accepted by carrier");
    }

    #[test]
    fn test_text_search_uses_camel_case_keys() {
        let payload = json!({
            "totalCount": "2",
            "pageIndex": 1,
            "pageSize": 20,
            "products": {"selection_search_product": [
                {"itemId": "1005006", "title": "Desk Lamp", "salePrice": "8.10", "videoUrl": null}
            ]}
        });

        let result = DsTextSearchResult::from_payload(&payload);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.products[0].item_id, "1005006");
        assert_eq!(result.products[0].sale_price, "8.10");
        assert_eq!(result.products[0].video_url, None);
    }

    #[test]
    fn test_trade_order_binds_logistics() {
        let payload = json!({
            "order_id": 3_012_345_678_901_234_i64,
            "order_status": "WAIT_SELLER_SEND_GOODS",
            "order_logistics_info": [{"logistics_number": "LP1", "logistics_company_name": "Cainiao"}]
        });

        let order = DsTradeOrderGetResponse::from_payload(&payload);
        assert_eq!(order.order_id, "3012345678901234");
        assert_eq!(order.order_logistics_info[0].logistics_company_name, "Cainiao");
        assert!(order.order_products.is_empty());
    }
}
