//! Dropshipping operations.
//!
//! Calls marked as session-scoped attach the configured access token.

use serde_json::{json, Map, Value};

use crate::clients::endpoints;
use crate::clients::{ApiRequest, FileItem};
use crate::config::Language;
use crate::models::{
    DsCategoryGetResponse, DsCommissionOrderListResponse, DsOrderListResponse,
    DsOrderTrackingGetResponse, DsProductGetResult, DsTextSearchResult, DsTradeOrderGetResponse,
};

use super::{
    AliexpressApi, DropshipperRegistration, DsOrderQuery, DsOrderRequest, DsProductQuery,
    FeedItemsQuery, FreightQuery, ImageSearchQuery, RecommendFeedQuery, ServiceError,
    TextSearchQuery,
};

/// Wire name of the freight query document.
const QUERY_DELIVERY_REQ: &str = "queryDeliveryReq";

fn language_code(language: Language) -> String {
    language.code().to_ascii_lowercase()
}

impl AliexpressApi {
    /// Fetches full product detail. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_product(
        &self,
        query: DsProductQuery,
    ) -> Result<DsProductGetResult, ServiceError> {
        let locale = query
            .locale
            .unwrap_or_else(|| self.locale(Some(&query.ship_to_country)));
        let currency = query.target_currency.unwrap_or(self.config.currency());
        let language = query
            .target_language
            .map_or_else(|| self.config.target_language(), language_code);

        let request = ApiRequest::builder(endpoints::DS_PRODUCT_GET)
            .param("product_id", query.product_id)
            .param("ship_to_country", query.ship_to_country)
            .param("target_currency", currency)
            .param("target_language", language)
            .param_opt("remove_personal_benefit", query.remove_personal_benefit)
            .param_opt("biz_model", query.biz_model)
            .param_opt("province_code", query.province_code)
            .param_opt("city_code", query.city_code)
            .param("locale", locale)
            .build()?;

        self.call(request, self.session()).await
    }

    /// Fetches the dropshipping category tree. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_categories(
        &self,
        category_id: Option<&str>,
        language: Option<Language>,
    ) -> Result<DsCategoryGetResponse, ServiceError> {
        let language = language.map_or_else(|| self.config.target_language(), language_code);

        let request = ApiRequest::builder(endpoints::DS_CATEGORY_GET)
            .param_opt("category_id", category_id)
            .param("language", language)
            .build()?;

        self.call(request, self.session()).await
    }

    /// Registers a dropshipper account.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn add_dropshipper(
        &self,
        registration: DropshipperRegistration,
    ) -> Result<Value, ServiceError> {
        let request = ApiRequest::builder(endpoints::DS_DROPSHIPPER_ADD)
            .param_opt("app_name", registration.app_name)
            .param_opt("country", registration.country)
            .param("email", registration.email)
            .param_opt("locale", registration.locale)
            .param_opt("mobile", registration.mobile)
            .param_opt("platform", registration.platform)
            .build()?;

        self.dispatch(request, None).await
    }

    /// Lists dropshipping orders in a time window.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::OrdersNotFound`] if the page is empty, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_orders(
        &self,
        query: DsOrderQuery,
    ) -> Result<DsOrderListResponse, ServiceError> {
        let request = self
            .order_window(endpoints::DS_ORDER_LIST, query, true)
            .build()?;

        let response: DsOrderListResponse = self.call(request, None).await?;
        if response.current_record_count > 0 {
            Ok(response)
        } else {
            Err(ServiceError::OrdersNotFound)
        }
    }

    /// Fetches one dropshipping order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_trade_order(
        &self,
        order_id: &str,
        fields: &[&str],
        locale: Option<&str>,
    ) -> Result<DsTradeOrderGetResponse, ServiceError> {
        let locale = locale.map_or_else(|| self.locale(None), str::to_string);

        let request = ApiRequest::builder(endpoints::DS_TRADE_ORDER_GET)
            .param_list("fields", fields)
            .param("locale", locale)
            .param("order_id", order_id)
            .build()?;

        self.call(request, None).await
    }

    /// Lists commission orders in a time window. `query.status` is not
    /// sent.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::OrdersNotFound`] if the page is empty, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_commission_orders(
        &self,
        query: DsOrderQuery,
    ) -> Result<DsCommissionOrderListResponse, ServiceError> {
        let request = self
            .order_window(endpoints::DS_COMMISSIONORDER_LIST, query, false)
            .build()?;

        let response: DsCommissionOrderListResponse = self.call(request, None).await?;
        if response.current_record_count > 0 {
            Ok(response)
        } else {
            Err(ServiceError::OrdersNotFound)
        }
    }

    /// Searches products by image. Session-scoped; the image is uploaded as
    /// `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn ds_image_search(&self, query: ImageSearchQuery) -> Result<Value, ServiceError> {
        let currency = query.target_currency.unwrap_or(self.config.currency());
        let language = query
            .target_language
            .map_or_else(|| self.config.target_language(), language_code);

        let request = ApiRequest::builder(endpoints::DS_IMAGE_SEARCH)
            .file("image_file_bytes", FileItem::new(query.filename, query.image))
            .param("sort", query.sort)
            .param("search_type", query.search_type)
            .param("limit", query.limit)
            .param("target_currency", currency)
            .param("target_language", language)
            .build()?;

        self.dispatch(request, self.session()).await
    }

    /// Fetches products from a recommendation feed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_recommend_feed(
        &self,
        query: RecommendFeedQuery,
    ) -> Result<Value, ServiceError> {
        let locale = query
            .locale
            .unwrap_or_else(|| self.locale(query.country.as_deref()));

        let request = ApiRequest::builder(endpoints::DS_RECOMMEND_FEED_GET)
            .param_opt("country", query.country)
            .param_list("fields", query.fields)
            .param_opt("feed_name", query.feed_name)
            .param("locale", locale)
            .param_opt("page_no", query.page_no)
            .param_opt("page_size", query.page_size)
            .param("target_currency", self.config.currency())
            .param("target_language", self.config.target_language())
            .param_opt("web_site", query.web_site)
            .build()?;

        self.dispatch(request, None).await
    }

    /// Places and pays for an order.
    ///
    /// The address and items are sent as one JSON document; the address
    /// gets the request locale unless it already carries one.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn create_ds_order(&self, order: DsOrderRequest) -> Result<Value, ServiceError> {
        let mut address: Map<String, Value> = order.logistics_address;
        if !address.contains_key("locale") {
            let locale = order.locale.unwrap_or_else(|| self.locale(None));
            address.insert("locale".to_string(), Value::String(locale));
        }

        let mut place_order = json!({
            "logistics_address": address,
            "product_items": order.product_items,
        });
        if let Some(out_order_id) = order.out_order_id {
            place_order["out_order_id"] = Value::String(out_order_id);
        }

        let request = ApiRequest::builder(endpoints::DS_ORDER_CREATE)
            .param("param_place_order_request4_open_api_d_t_o", place_order)
            .param_opt("ds_extend_request", order.ds_extend_params)
            .build()?;

        self.dispatch(request, None).await
    }

    /// Queries shipping options and fees for one SKU.
    ///
    /// The query is sent as a JSON document under the wire name
    /// `queryDeliveryReq`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn query_ds_freight(&self, query: FreightQuery) -> Result<Value, ServiceError> {
        let locale = query
            .locale
            .unwrap_or_else(|| self.locale(Some(&query.country_code)));
        let currency = query.currency.unwrap_or(self.config.currency());
        let language = query
            .language
            .map_or_else(|| self.config.target_language(), language_code);

        let mut document = json!({
            "productId": query.product_id,
            "selectedSkuId": query.sku_id,
            "shipToCountry": query.country_code,
            "quantity": query.quantity,
            "locale": locale,
            "currency": currency.code(),
            "language": language,
        });
        if let Some(province_code) = query.province_code {
            document["provinceCode"] = Value::String(province_code);
        }
        if let Some(city_code) = query.city_code {
            document["cityCode"] = Value::String(city_code);
        }

        let request = ApiRequest::builder(endpoints::DS_FREIGHT_QUERY)
            .param("query_delivery_req", document)
            .translate("query_delivery_req", QUERY_DELIVERY_REQ)
            .build()?;

        self.dispatch(request, None).await
    }

    /// Fetches tracking for an order. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_order_tracking(
        &self,
        ae_order_id: &str,
        language: Option<Language>,
    ) -> Result<DsOrderTrackingGetResponse, ServiceError> {
        let language = language.map_or_else(|| self.config.target_language(), language_code);

        let request = ApiRequest::builder(endpoints::DS_ORDER_TRACKING_GET)
            .param("ae_order_id", ae_order_id)
            .param("language", language)
            .build()?;

        self.call(request, self.session()).await
    }

    /// Fetches the item ids of a feed. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_feed_items(&self, query: FeedItemsQuery) -> Result<Value, ServiceError> {
        let locale = query.locale.unwrap_or_else(|| self.locale(None));

        let request = ApiRequest::builder(endpoints::DS_FEED_ITEMIDS_GET)
            .param("feed_name", query.feed_name)
            .param("locale", locale)
            .param_opt("page_no", query.page_no)
            .param_opt("page_size", query.page_size)
            .param_opt("web_site", query.web_site)
            .build()?;

        self.dispatch(request, self.session()).await
    }

    /// Searches dropshipping products by keyword. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ProductsNotFound`] if nothing matches, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn text_search_ds(
        &self,
        query: TextSearchQuery,
    ) -> Result<DsTextSearchResult, ServiceError> {
        let locale = query
            .locale
            .unwrap_or_else(|| self.locale(Some(&query.country)));

        let request = ApiRequest::builder(endpoints::DS_TEXT_SEARCH)
            .param_list("categoryId", query.category_ids)
            .param("countryCode", query.country)
            .param("keyWord", query.keywords)
            .param("local", locale)
            .param_opt("pageIndex", query.page_no)
            .param_opt("pageSize", query.page_size)
            .param_opt("sortBy", query.sort)
            .param("currency", self.config.currency())
            .build()?;

        let result: DsTextSearchResult = self.call(request, self.session()).await?;
        if result.total_count > 0 {
            Ok(result)
        } else {
            Err(ServiceError::ProductsNotFound)
        }
    }

    /// Fetches an order from the buyer side.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_trade_ds_order(
        &self,
        order_id: &str,
        fields: &[&str],
        locale: Option<&str>,
        web_site: Option<&str>,
    ) -> Result<DsTradeOrderGetResponse, ServiceError> {
        let locale = locale.map_or_else(|| self.locale(None), str::to_string);

        let request = ApiRequest::builder(endpoints::TRADE_DS_ORDER_GET)
            .param_list("fields", fields)
            .param("locale", locale)
            .param("order_id", order_id)
            .param_opt("web_site", web_site)
            .build()?;

        self.call(request, None).await
    }

    /// Fetches special product information such as certifications.
    /// Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_product_special_info(
        &self,
        product_id: &str,
        fields: &[&str],
        locale: Option<&str>,
        web_site: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let request = self
            .product_lookup(endpoints::DS_PRODUCT_SPECIALINFO_GET, product_id, fields, locale)
            .param_opt("web_site", web_site)
            .build()?;

        self.dispatch(request, self.session()).await
    }

    /// Fetches wholesale pricing for a product. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_wholesale_product(
        &self,
        product_id: &str,
        fields: &[&str],
        locale: Option<&str>,
        web_site: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let request = self
            .product_lookup(endpoints::DS_PRODUCT_WHOLESALE_GET, product_id, fields, locale)
            .param_opt("web_site", web_site)
            .build()?;

        self.dispatch(request, self.session()).await
    }

    /// Reports buyer search events. Session-scoped.
    ///
    /// `events` is sent as one JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn report_ds_search_event(
        &self,
        events: &Value,
        locale: Option<&str>,
        web_site: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let locale = locale.map_or_else(|| self.locale(None), str::to_string);

        let request = ApiRequest::builder(endpoints::DS_SEARCH_EVENT_REPORT)
            .param("event_list", events)
            .param("locale", locale)
            .param_opt("web_site", web_site)
            .build()?;

        self.dispatch(request, self.session()).await
    }

    /// Fetches the dropshipper's member benefits. Session-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn get_ds_member_benefit(
        &self,
        locale: Option<&str>,
        web_site: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let locale = locale.map_or_else(|| self.locale(None), str::to_string);

        let request = ApiRequest::builder(endpoints::DS_MEMBER_BENEFIT_GET)
            .param("locale", locale)
            .param_opt("web_site", web_site)
            .build()?;

        self.dispatch(request, self.session()).await
    }

    fn product_lookup(
        &self,
        endpoint: &str,
        product_id: &str,
        fields: &[&str],
        locale: Option<&str>,
    ) -> crate::clients::ApiRequestBuilder {
        let locale = locale.map_or_else(|| self.locale(None), str::to_string);

        ApiRequest::builder(endpoint)
            .param_list("fields", fields)
            .param("locale", locale)
            .param("product_id", product_id)
    }

    fn order_window(
        &self,
        endpoint: &str,
        query: DsOrderQuery,
        with_status: bool,
    ) -> crate::clients::ApiRequestBuilder {
        let locale = query.locale.unwrap_or_else(|| self.locale(None));
        let status = if with_status { query.status } else { None };

        ApiRequest::builder(endpoint)
            .param("end_time", query.end_time)
            .param_list("fields", query.fields)
            .param("locale", locale)
            .param_opt("page_no", query.page_no)
            .param_opt("page_size", query.page_size)
            .param("start_time", query.start_time)
            .param_opt("status", status)
    }
}
