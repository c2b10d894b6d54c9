//! Affiliate link and order records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A promotion link generated for one source URL.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AffiliateLink {
    #[serde(deserialize_with = "lenient::string")]
    pub promotion_link: String,
    /// The URL the link was generated for.
    #[serde(deserialize_with = "lenient::string")]
    pub source_value: String,
}

/// Result of `aliexpress.affiliate.link.generate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AffiliateLinksResponse {
    #[serde(deserialize_with = "lenient::integer")]
    pub total_result_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub promotion_links: Vec<AffiliateLink>,
}

/// An order attributed to the affiliate account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AffiliateOrder {
    #[serde(deserialize_with = "lenient::integer")]
    pub order_id: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub parent_order_number: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub order_status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub created_time: String,
    #[serde(deserialize_with = "lenient::string")]
    pub paid_time: String,
    #[serde(deserialize_with = "lenient::string")]
    pub finished_time: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub product_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub product_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_detail_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub product_main_image_url: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub product_count: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub paid_amount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub estimated_paid_commission: String,
    #[serde(deserialize_with = "lenient::string")]
    pub estimated_finished_commission: String,
    #[serde(deserialize_with = "lenient::string")]
    pub commission_rate: String,
    #[serde(deserialize_with = "lenient::string")]
    pub settled_currency: String,
    #[serde(deserialize_with = "lenient::string")]
    pub tracking_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ship_to_country: String,
    #[serde(deserialize_with = "lenient::string")]
    pub order_type: String,
}

/// A page of affiliate orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderListResponse {
    #[serde(deserialize_with = "lenient::integer")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub total_page_no: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub current_page_no: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub orders: Vec<AffiliateOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FromPayload;
    use serde_json::json;

    #[test]
    fn test_links_response_unwraps_promotion_link_list() {
        let payload = json!({
            "total_result_count": 1,
            "promotion_links": {
                "promotion_link": [{
                    "promotion_link": "https://s.click.aliexpress.com/e/_DkXyz",
                    "source_value": "https://www.aliexpress.com/item/1005001234567890.html"
                }]
            }
        });

        let response = AffiliateLinksResponse::from_payload(&payload);
        assert_eq!(response.total_result_count, 1);
        assert_eq!(response.promotion_links.len(), 1);
        assert_eq!(
            response.promotion_links[0].promotion_link,
            "https://s.click.aliexpress.com/e/_DkXyz"
        );
    }

    #[test]
    fn test_order_list_binds_orders() {
        let payload = json!({
            "current_record_count": 1,
            "total_page_no": "3",
            "orders": {"order": [{"order_id": "8123456789", "order_status": "Payment Completed", "paid_amount": 10.5}]}
        });

        let response = OrderListResponse::from_payload(&payload);
        assert_eq!(response.total_page_no, 3);
        assert_eq!(response.orders[0].order_id, 8_123_456_789);
        assert_eq!(response.orders[0].order_status, "Payment Completed");
        assert_eq!(response.orders[0].paid_amount, "10.5");
    }
}
