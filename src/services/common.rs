//! Operations shared by affiliate and dropshipping accounts.

use serde_json::Value;

use crate::clients::endpoints;
use crate::clients::ApiRequest;
use crate::models::{
    filter_child_categories, filter_parent_categories, BuyerFreightCalculateResponse,
    CategoriesResponse, Category, ChildCategory, Product, ProductsResponse,
};

use super::affiliate::extract_product_id;
use super::{AliexpressApi, ServiceError};

impl AliexpressApi {
    /// Fetches product details for product ids or item URLs.
    ///
    /// URLs are reduced to their product id before sending; inputs with no
    /// recognizable id are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ProductsNotFound`] if no input yields an id
    /// (nothing is sent) or nothing comes back, or
    /// [`ServiceError::Api`] if the call fails.
    pub async fn get_products_details<I, S>(
        &self,
        product_ids: I,
        fields: &[&str],
        country: Option<&str>,
    ) -> Result<Vec<Product>, ServiceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = product_ids
            .into_iter()
            .filter_map(|value| extract_product_id(value.as_ref()))
            .collect();
        if ids.is_empty() {
            return Err(ServiceError::ProductsNotFound);
        }

        let request = ApiRequest::builder(endpoints::AFFILIATE_PRODUCTDETAIL_GET)
            .param_list("fields", fields)
            .param_list("product_ids", &ids)
            .param_opt("country", country)
            .param("target_currency", self.config.currency())
            .param("target_language", self.config.target_language())
            .param_opt("tracking_id", self.config.tracking_id())
            .build()?;

        let response: ProductsResponse = self.call(request, None).await?;
        if response.products.is_empty() {
            Err(ServiceError::ProductsNotFound)
        } else {
            Ok(response.products)
        }
    }

    /// Fetches all affiliate categories and stores them in the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CategoriesNotFound`] if the list is empty, or
    /// [`ServiceError::Api`] if the call fails. The cache is left unchanged
    /// on error.
    pub async fn get_categories(&mut self) -> Result<Vec<Category>, ServiceError> {
        let request = ApiRequest::builder(endpoints::AFFILIATE_CATEGORY_GET).build()?;
        let response: CategoriesResponse = self.call(request, None).await?;

        if response.categories.is_empty() {
            return Err(ServiceError::CategoriesNotFound);
        }
        tracing::debug!(count = response.categories.len(), "Cached affiliate categories");
        self.categories = Some(response.categories.clone());
        Ok(response.categories)
    }

    /// Returns the top-level categories.
    ///
    /// With `use_cache`, an already filled cache is used instead of calling
    /// the API.
    ///
    /// # Errors
    ///
    /// See [`get_categories`](Self::get_categories).
    pub async fn get_parent_categories(
        &mut self,
        use_cache: bool,
    ) -> Result<Vec<Category>, ServiceError> {
        let categories = self.categories_for(use_cache).await?;
        Ok(filter_parent_categories(categories))
    }

    /// Returns the categories directly under `parent_category_id`.
    ///
    /// # Errors
    ///
    /// See [`get_categories`](Self::get_categories).
    pub async fn get_child_categories(
        &mut self,
        parent_category_id: i64,
        use_cache: bool,
    ) -> Result<Vec<ChildCategory>, ServiceError> {
        let categories = self.categories_for(use_cache).await?;
        Ok(filter_child_categories(categories, parent_category_id))
    }

    /// Calculates shipping options for a buyer.
    ///
    /// `product_list` is sent as JSON. The locale defaults to the configured
    /// language in `country_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails.
    pub async fn calculate_buyer_freight(
        &self,
        country_code: &str,
        product_list: &Value,
        locale: Option<&str>,
        web_site: Option<&str>,
    ) -> Result<BuyerFreightCalculateResponse, ServiceError> {
        let locale = locale.map_or_else(|| self.locale(Some(country_code)), str::to_string);

        let request = ApiRequest::builder(endpoints::LOGISTICS_BUYER_FREIGHT_CALCULATE)
            .param("country_code", country_code)
            .param("locale", locale)
            .param("product_list", product_list)
            .param_opt("web_site", web_site)
            .build()?;

        self.call(request, None).await
    }

    async fn categories_for(&mut self, use_cache: bool) -> Result<&[Category], ServiceError> {
        if !use_cache || self.categories.as_ref().map_or(true, Vec::is_empty) {
            self.get_categories().await?;
        }
        Ok(self.categories.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::test_config;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn categories_body() -> Value {
        json!({
            "aliexpress_affiliate_category_get_response": {
                "resp_result": {
                    "resp_code": 200,
                    "result": {
                        "total_result_count": 3,
                        "categories": {"category": [
                            {"category_id": 2, "category_name": "Food"},
                            {"category_id": 100_001, "category_name": "Snacks", "parent_category_id": 2},
                            {"category_id": 3, "category_name": "Apparel"}
                        ]}
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_category_cache_avoids_second_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("method", "aliexpress.affiliate.category.get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut api = AliexpressApi::new(test_config(&server.uri()));
        let parents = api.get_parent_categories(true).await.unwrap();
        assert_eq!(parents.len(), 2);

        let children = api.get_child_categories(2, true).await.unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].category_name, "Snacks");
        assert_eq!(api.cached_categories().map(<[Category]>::len), Some(3));
    }

    #[tokio::test]
    async fn test_category_refresh_bypasses_cache() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("method", "aliexpress.affiliate.category.get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .expect(2)
            .mount(&server)
            .await;

        let mut api = AliexpressApi::new(test_config(&server.uri()));
        api.get_categories().await.unwrap();
        api.get_parent_categories(false).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_categories_are_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aliexpress_affiliate_category_get_response": {
                    "resp_result": {"resp_code": 200, "result": {"total_result_count": 0}}
                }
            })))
            .mount(&server)
            .await;

        let mut api = AliexpressApi::new(test_config(&server.uri()));
        let result = api.get_categories().await;
        assert!(matches!(result, Err(ServiceError::CategoriesNotFound)));
        assert!(api.cached_categories().is_none());
    }

    #[tokio::test]
    async fn test_product_details_extract_ids_from_urls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sync"))
            .and(body_string_contains("product_ids=1005001%2C33006951782"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aliexpress_affiliate_productdetail_get_response": {
                    "resp_result": {
                        "resp_code": 200,
                        "result": {
                            "current_record_count": 1,
                            "products": {"product": [{"product_id": 1_005_001, "product_title": "Lamp"}]}
                        }
                    }
                }
            })))
            .mount(&server)
            .await;

        let api = AliexpressApi::new(test_config(&server.uri()));
        let products = api
            .get_products_details(
                ["1005001", "https://www.aliexpress.com/item/33006951782.html"],
                &[],
                None,
            )
            .await
            .unwrap();
        assert_eq!(products[0].product_title, "Lamp");
    }

    #[tokio::test]
    async fn test_product_details_without_ids_are_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let api = AliexpressApi::new(test_config(&server.uri()));
        let result = api
            .get_products_details(
                [
                    "https://s.click.aliexpress.com/e/_DmXyz9",
                    "https://www.aliexpress.us/store/1101234567",
                ],
                &[],
                None,
            )
            .await;
        assert!(matches!(result, Err(ServiceError::ProductsNotFound)));
    }

    #[tokio::test]
    async fn test_buyer_freight_defaults_locale_to_country() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("locale=en_BR"))
            .and(body_string_contains("country_code=BR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aliexpress_logistics_buyer_freight_calculate_response": {
                    "result": {
                        "success": true,
                        "aeop_freight_calculate_result_dtos": {"aeop_freight_calculate_result_dto": [
                            {"service_name": "CAINIAO_STANDARD", "freight": {"amount": "1.00", "cent": 100}}
                        ]}
                    }
                }
            })))
            .mount(&server)
            .await;

        let api = AliexpressApi::new(test_config(&server.uri()));
        let products = json!([{"product_id": "1005001", "product_num": 1}]);
        let response = api
            .calculate_buyer_freight("BR", &products, None, None)
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.freight_options[0].service_name, "CAINIAO_STANDARD");
    }
}
