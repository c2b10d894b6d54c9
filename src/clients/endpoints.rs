//! Endpoint names and their response keys.

/// OAuth: exchange an authorization code for an access token.
pub const AUTH_TOKEN_CREATE: &str = "/auth/token/create";
/// OAuth: refresh an access token.
pub const AUTH_TOKEN_REFRESH: &str = "/auth/token/refresh";

pub const AFFILIATE_LINK_GENERATE: &str = "aliexpress.affiliate.link.generate";
pub const AFFILIATE_HOTPRODUCT_QUERY: &str = "aliexpress.affiliate.hotproduct.query";
pub const AFFILIATE_PRODUCT_QUERY: &str = "aliexpress.affiliate.product.query";
pub const AFFILIATE_PRODUCT_SMARTMATCH: &str = "aliexpress.affiliate.product.smartmatch";
pub const AFFILIATE_ORDER_LIST: &str = "aliexpress.affiliate.order.list";
pub const AFFILIATE_PRODUCTDETAIL_GET: &str = "aliexpress.affiliate.productdetail.get";
pub const AFFILIATE_CATEGORY_GET: &str = "aliexpress.affiliate.category.get";

pub const LOGISTICS_BUYER_FREIGHT_CALCULATE: &str = "aliexpress.logistics.buyer.freight.calculate";

pub const DS_PRODUCT_GET: &str = "aliexpress.ds.product.get";
pub const DS_CATEGORY_GET: &str = "aliexpress.ds.category.get";
pub const DS_DROPSHIPPER_ADD: &str = "aliexpress.ds.dropshipper.add";
pub const DS_ORDER_LIST: &str = "aliexpress.ds.order.list";
pub const DS_TRADE_ORDER_GET: &str = "aliexpress.ds.trade.order.get";
pub const DS_COMMISSIONORDER_LIST: &str = "aliexpress.ds.commissionorder.listbyindex";
pub const DS_IMAGE_SEARCH: &str = "aliexpress.ds.image.searchV2";
pub const DS_RECOMMEND_FEED_GET: &str = "aliexpress.ds.recommend.feed.get";
pub const DS_ORDER_CREATE: &str = "aliexpress.ds.order.create";
pub const DS_FREIGHT_QUERY: &str = "aliexpress.ds.freight.query";
pub const DS_ORDER_TRACKING_GET: &str = "aliexpress.ds.order.tracking.get";
pub const DS_FEED_ITEMIDS_GET: &str = "aliexpress.ds.feed.itemids.get";
pub const DS_TEXT_SEARCH: &str = "aliexpress.ds.text.search";
pub const DS_PRODUCT_SPECIALINFO_GET: &str = "aliexpress.ds.product.specialinfo.get";
pub const DS_PRODUCT_WHOLESALE_GET: &str = "aliexpress.ds.product.wholesale.get";
pub const DS_SEARCH_EVENT_REPORT: &str = "aliexpress.ds.search.event.report";
pub const DS_MEMBER_BENEFIT_GET: &str = "aliexpress.ds.member.benefit.get";
pub const TRADE_DS_ORDER_GET: &str = "aliexpress.trade.ds.order.get";

/// Derives the top-level response key for an endpoint.
///
/// Dots become underscores, camel-case humps are split with an underscore
/// and `_response` is appended.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::clients::endpoints::response_key;
///
/// assert_eq!(
///     response_key("aliexpress.ds.product.get"),
///     "aliexpress_ds_product_get_response"
/// );
/// assert_eq!(
///     response_key("aliexpress.ds.image.searchV2"),
///     "aliexpress_ds_image_search_v2_response"
/// );
/// ```
#[must_use]
pub fn response_key(endpoint: &str) -> String {
    let mut key = String::with_capacity(endpoint.len() + 9);
    let mut previous: Option<char> = None;
    for c in endpoint.trim_matches('/').chars() {
        match c {
            '.' | '/' => key.push('_'),
            c if c.is_ascii_uppercase() => {
                if previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                    key.push('_');
                }
                key.push(c.to_ascii_lowercase());
            }
            c => key.push(c),
        }
        previous = Some(c);
    }
    key.push_str("_response");
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_key_for_dotted_names() {
        assert_eq!(
            response_key(AFFILIATE_LINK_GENERATE),
            "aliexpress_affiliate_link_generate_response"
        );
        assert_eq!(
            response_key(DS_COMMISSIONORDER_LIST),
            "aliexpress_ds_commissionorder_listbyindex_response"
        );
    }

    #[test]
    fn test_response_key_splits_camel_case() {
        assert_eq!(
            response_key(DS_IMAGE_SEARCH),
            "aliexpress_ds_image_search_v2_response"
        );
    }

    #[test]
    fn test_response_key_for_path_style_names() {
        assert_eq!(response_key(AUTH_TOKEN_CREATE), "auth_token_create_response");
    }
}
