//! HTTP client for AliExpress Open Platform communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`ApiRequest`] into one signed HTTP round-trip.

use std::collections::{BTreeMap, HashMap};

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::auth::signature::sign_with;
use crate::clients::api_request::ApiRequest;
use crate::clients::envelope::value_to_string;
use crate::clients::errors::{ApiError, ProviderError, ResponseShapeError, TransportError};
use crate::config::{AliexpressConfig, ApiHost, AppKey, AppSecret, SignMethod};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gateway path for dotted RPC-style endpoints.
pub const SYNC_PATH: &str = "/sync";

/// Gateway path prefix for path-style endpoints.
pub const REST_PATH: &str = "/rest";

/// HTTP client for making signed requests to the AliExpress Open Platform.
///
/// The client handles:
/// - System parameters (`app_key`, `timestamp`, `sign_method`, ...) with a
///   fresh millisecond timestamp per call
/// - Request signing over system and application parameters
/// - The query/body split: system parameters in the query string,
///   application parameters as a form or multipart body
/// - Mapping non-2xx statuses and top-level `error_response` objects to
///   errors
///
/// There are no retries. Envelope unwrapping is left to
/// [`unwrap_envelope`](crate::clients::envelope::unwrap_envelope).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use aliexpress_api::clients::{ApiRequest, HttpClient};
///
/// let client = HttpClient::new(&config);
/// let request = ApiRequest::builder("aliexpress.affiliate.category.get")
///     .build()
///     .unwrap();
///
/// let raw = client.execute(request, None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Gateway host (e.g., `https://api-sg.aliexpress.com`).
    api_host: ApiHost,
    app_key: AppKey,
    app_secret: AppSecret,
    sign_method: SignMethod,
    partner_id: String,
    timeout: std::time::Duration,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the SDK configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use aliexpress_api::{AliexpressConfig, AppKey, AppSecret};
    /// use aliexpress_api::clients::HttpClient;
    ///
    /// let config = AliexpressConfig::builder()
    ///     .app_key(AppKey::new("502123").unwrap())
    ///     .app_secret(AppSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.api_host().as_ref(), "https://api-sg.aliexpress.com");
    /// ```
    #[must_use]
    pub fn new(config: &AliexpressConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}AliExpress API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_host: config.api_host().clone(),
            app_key: config.app_key().clone(),
            app_secret: config.app_secret().clone(),
            sign_method: config.sign_method(),
            partner_id: config.partner_id().to_string(),
            timeout: config.timeout(),
            default_headers,
        }
    }

    /// Returns the gateway host for this client.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the URL a request is posted to.
    ///
    /// Dotted endpoints go to `<host>/sync`; path-style endpoints go to
    /// `<host>/rest<endpoint>`.
    #[must_use]
    pub fn endpoint_url(&self, request: &ApiRequest) -> String {
        if request.is_path_style() {
            let path = request.endpoint.trim();
            let separator = if path.starts_with('/') { "" } else { "/" };
            format!("{}{REST_PATH}{separator}{path}", self.api_host.as_ref())
        } else {
            format!("{}{SYNC_PATH}", self.api_host.as_ref())
        }
    }

    /// Assembles the system parameters for a request at `timestamp_ms`.
    ///
    /// The access token and the signature are not included.
    #[must_use]
    pub fn system_params(&self, request: &ApiRequest, timestamp_ms: i64) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("app_key".to_string(), self.app_key.as_ref().to_string()),
            ("format".to_string(), "json".to_string()),
            ("method".to_string(), request.endpoint.clone()),
            ("partner_id".to_string(), self.partner_id.clone()),
            ("sign_method".to_string(), self.sign_method.as_str().to_string()),
            ("timestamp".to_string(), timestamp_ms.to_string()),
        ])
    }

    /// Signs and sends a request, returning the decoded JSON body.
    ///
    /// The signature covers system and application parameters; the access
    /// token is attached afterwards and is not signed. Provider error codes
    /// inside the `<method>_response` envelope are not inspected here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The network call fails or times out, or the status is not 2xx
    ///   (`Transport`)
    /// - The body contains a top-level `error_response` (`Provider`)
    /// - The body is not a JSON object (`ResponseShape`)
    pub async fn execute(
        &self,
        request: ApiRequest,
        access_token: Option<&str>,
    ) -> Result<Value, ApiError> {
        request.verify()?;

        let timestamp = chrono::Utc::now().timestamp_millis();
        let mut query = self.system_params(&request, timestamp);
        let application = request.application_params();

        let signature = sign_with(
            self.sign_method,
            self.app_secret.as_ref(),
            &request.endpoint,
            query.iter().chain(application.iter()),
        );
        query.insert("sign".to_string(), signature);
        if let Some(token) = access_token.filter(|t| !t.is_empty()) {
            query.insert("access_token".to_string(), token.to_string());
        }

        let url = self.endpoint_url(&request);
        tracing::debug!(
            endpoint = %request.endpoint,
            params = ?application.keys().collect::<Vec<_>>(),
            multipart = request.is_multipart(),
            authorized = access_token.is_some(),
            "Dispatching API request"
        );

        let mut req_builder = self
            .client
            .post(&url)
            .query(&query)
            .timeout(request.timeout.unwrap_or(self.timeout));

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = if request.is_multipart() {
            let mut form = Form::new();
            for (name, value) in application {
                form = form.text(name, value);
            }
            for (name, file) in &request.files {
                let part = Part::bytes(file.content.clone()).file_name(file.filename.clone());
                form = form.part(request.wire_name(name).to_string(), part);
            }
            req_builder.multipart(form)
        } else {
            req_builder.form(&application)
        };

        let res = req_builder.send().await.map_err(|e| {
            let error = TransportError::from(e);
            tracing::error!(endpoint = %request.endpoint, error = %error, "API request failed");
            error
        })?;

        let status = res.status();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.map_err(TransportError::from)?;

        tracing::debug!(
            endpoint = %request.endpoint,
            status = status.as_u16(),
            body = %body_text,
            "Received API response"
        );

        if !status.is_success() {
            let error = TransportError {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string(),
                body: Some(body_text),
            };
            tracing::error!(endpoint = %request.endpoint, error = %error, "API request failed");
            return Err(error.into());
        }

        let body: Value = serde_json::from_str(&body_text).map_err(|_| {
            ResponseShapeError::NotAnObject {
                snippet: body_text.chars().take(200).collect(),
            }
        })?;
        if !body.is_object() {
            return Err(ResponseShapeError::NotAnObject {
                snippet: body_text.chars().take(200).collect(),
            }
            .into());
        }

        if let Some(error_response) = body.get("error_response") {
            let error = Self::provider_error(error_response, &res_headers);
            tracing::error!(
                endpoint = %request.endpoint,
                code = %error.code,
                message = %error.message,
                sub_code = ?error.sub_code,
                "API request rejected"
            );
            return Err(error.into());
        }

        Ok(body)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds a [`ProviderError`] from an `error_response` object.
    fn provider_error(
        error_response: &Value,
        headers: &HashMap<String, Vec<String>>,
    ) -> ProviderError {
        let field = |key: &str| {
            error_response
                .get(key)
                .filter(|v| !v.is_null())
                .map(value_to_string)
        };
        let header = |name: &str| headers.get(name).and_then(|values| values.first()).cloned();

        ProviderError {
            code: field("code").unwrap_or_else(|| "Unknown".to_string()),
            message: field("msg").unwrap_or_else(|| "Unknown error".to_string()),
            sub_code: field("sub_code"),
            sub_msg: field("sub_msg"),
            application_host: header("application-host"),
            service_host: header("location-host"),
            request_id: field("request_id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signature::sign;
    use crate::clients::api_request::FileItem;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn test_config(host: &str) -> AliexpressConfig {
        AliexpressConfig::builder()
            .app_key(AppKey::new("12345").unwrap())
            .app_secret(AppSecret::new("test-secret").unwrap())
            .api_host(ApiHost::new(host).unwrap())
            .build()
            .unwrap()
    }

    fn query_map(request: &Request) -> BTreeMap<String, String> {
        request
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_endpoint_url_routing() {
        let client = HttpClient::new(&test_config("https://api-sg.aliexpress.com"));

        let dotted = ApiRequest::builder("aliexpress.ds.product.get").build().unwrap();
        assert_eq!(
            client.endpoint_url(&dotted),
            "https://api-sg.aliexpress.com/sync"
        );

        let path_style = ApiRequest::builder("/auth/token/create").build().unwrap();
        assert_eq!(
            client.endpoint_url(&path_style),
            "https://api-sg.aliexpress.com/rest/auth/token/create"
        );
    }

    #[test]
    fn test_system_params() {
        let client = HttpClient::new(&test_config("https://api-sg.aliexpress.com"));
        let request = ApiRequest::builder("aliexpress.ds.product.get").build().unwrap();

        let params = client.system_params(&request, 1_700_000_000_000);
        assert_eq!(params["app_key"], "12345");
        assert_eq!(params["format"], "json");
        assert_eq!(params["method"], "aliexpress.ds.product.get");
        assert_eq!(params["sign_method"], "sha256");
        assert_eq!(params["timestamp"], "1700000000000");
        assert!(params["partner_id"].starts_with("iop-sdk-rust-"));
        assert!(!params.contains_key("sign"));
        assert!(!params.contains_key("access_token"));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&test_config("https://api-sg.aliexpress.com"));
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("AliExpress API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_execute_signs_system_and_application_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sync"))
            .and(query_param("method", "aliexpress.ds.product.get"))
            .and(body_string_contains("product_id=100500"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config(&server.uri()));
        let request = ApiRequest::builder("aliexpress.ds.product.get")
            .param("product_id", "100500")
            .build()
            .unwrap();

        let body = client.execute(request, None).await.unwrap();
        assert_eq!(body, json!({"ok": {}}));

        let received = server.received_requests().await.unwrap();
        let mut query = query_map(&received[0]);
        let sent_sign = query.remove("sign").unwrap();

        let mut signed = query.clone();
        signed.insert("product_id".to_string(), "100500".to_string());
        assert_eq!(
            sent_sign,
            sign("test-secret", "aliexpress.ds.product.get", &signed)
        );
        assert!(!query.contains_key("product_id"));
    }

    #[tokio::test]
    async fn test_access_token_is_sent_but_not_signed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("access_token", "session-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config(&server.uri()));
        let request = ApiRequest::builder("aliexpress.ds.order.tracking.get")
            .param("ae_order_id", "8888")
            .build()
            .unwrap();
        client.execute(request, Some("session-token")).await.unwrap();

        let received = server.received_requests().await.unwrap();
        let mut query = query_map(&received[0]);
        let sent_sign = query.remove("sign").unwrap();
        query.remove("access_token");
        query.insert("ae_order_id".to_string(), "8888".to_string());
        assert_eq!(
            sent_sign,
            sign("test-secret", "aliexpress.ds.order.tracking.get", &query)
        );
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal failure"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config(&server.uri()));
        let request = ApiRequest::builder("a.b").build().unwrap();

        match client.execute(request, None).await {
            Err(ApiError::Transport(error)) => {
                assert_eq!(error.status, Some(500));
                assert_eq!(error.body.as_deref(), Some("Internal failure"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_response_is_provider_error_with_hosts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Application-Host", "app-host-1")
                    .insert_header("Location-Host", "location-host-1")
                    .set_body_json(json!({
                        "error_response": {
                            "code": "IncompleteSignature",
                            "msg": "The request signature does not conform to platform standards",
                            "sub_code": "isv.sign-invalid",
                            "sub_msg": "bad sign",
                            "request_id": "2101"
                        }
                    })),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config(&server.uri()));
        let request = ApiRequest::builder("a.b").build().unwrap();

        match client.execute(request, None).await {
            Err(ApiError::Provider(error)) => {
                assert_eq!(error.code, "IncompleteSignature");
                assert_eq!(error.sub_code.as_deref(), Some("isv.sign-invalid"));
                assert_eq!(error.sub_msg.as_deref(), Some("bad sign"));
                assert_eq!(error.application_host.as_deref(), Some("app-host-1"));
                assert_eq!(error.service_host.as_deref(), Some("location-host-1"));
                assert_eq!(error.request_id.as_deref(), Some("2101"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config(&server.uri()));
        let request = ApiRequest::builder("a.b").build().unwrap();

        assert!(matches!(
            client.execute(request, None).await,
            Err(ApiError::ResponseShape(ResponseShapeError::NotAnObject { .. }))
        ));
    }

    #[tokio::test]
    async fn test_multipart_request_carries_file_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sync"))
            .and(body_string_contains("Content-Disposition: form-data"))
            .and(body_string_contains("filename=\"photo.jpg\""))
            .and(body_string_contains("name=\"image_file_bytes\""))
            .and(body_string_contains("name=\"sort\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&test_config(&server.uri()));
        let request = ApiRequest::builder("aliexpress.ds.image.searchV2")
            .param("sort", "default")
            .file("image_file_bytes", FileItem::new("photo.jpg", b"JPEGDATA".to_vec()))
            .build()
            .unwrap();

        client.execute(request, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_sending() {
        let client = HttpClient::new(&test_config("http://127.0.0.1:9"));
        let request = ApiRequest {
            endpoint: String::new(),
            params: BTreeMap::new(),
            files: BTreeMap::new(),
            translations: HashMap::new(),
            timeout: None,
        };

        assert!(matches!(
            client.execute(request, None).await,
            Err(ApiError::InvalidRequest(_))
        ));
    }
}
