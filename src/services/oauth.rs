//! OAuth token operations.

use crate::auth::extract_token_payload;
use crate::clients::endpoints;
use crate::clients::ApiRequest;
use crate::models::{FromPayload, TokenResponse};

use super::{AliexpressApi, ServiceError};

impl AliexpressApi {
    /// Exchanges an authorization code for an access token.
    ///
    /// The code comes from the app's OAuth callback; it expires after a few
    /// minutes and can be used once. `uuid` is rarely needed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails or the provider
    /// rejects the code.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let token = api.generate_access_token("3_500102_JxZ05Ux3cnnSSUm6dCxYg6Q26", None).await?;
    /// println!("expires in {:?} seconds", token.expires_in);
    /// ```
    pub async fn generate_access_token(
        &self,
        code: &str,
        uuid: Option<&str>,
    ) -> Result<TokenResponse, ServiceError> {
        let request = ApiRequest::builder(endpoints::AUTH_TOKEN_CREATE)
            .param("code", code)
            .param_opt("uuid", uuid)
            .build()?;
        self.token_request(request).await
    }

    /// Obtains a new access token with a refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the call fails or the provider
    /// rejects the refresh token.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, ServiceError> {
        let request = ApiRequest::builder(endpoints::AUTH_TOKEN_REFRESH)
            .param("refresh_token", refresh_token)
            .build()?;
        self.token_request(request).await
    }

    async fn token_request(&self, request: ApiRequest) -> Result<TokenResponse, ServiceError> {
        let endpoint = request.endpoint.clone();
        let body = self.client.execute(request, None).await?;
        let payload = extract_token_payload(body)?;
        tracing::debug!(endpoint = %endpoint, "Token issued");
        Ok(TokenResponse::from_payload(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::test_config;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_access_token_posts_to_rest_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/auth/token/create"))
            .and(body_string_contains("code=oauth-code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "access_token": "50000600c36GBrLk",
                "refresh_token": "50001600a36bRlk",
                "expires_in": 86400,
                "refresh_expires_in": 172_800,
                "user_nick": "buyer01",
                "request_id": "2140e3c7"
            })))
            .mount(&server)
            .await;

        let api = AliexpressApi::new(test_config(&server.uri()));
        let token = api.generate_access_token("oauth-code", None).await.unwrap();
        assert_eq!(token.access_token.as_deref(), Some("50000600c36GBrLk"));
        assert_eq!(token.expires_in, Some(86_400));
        assert_eq!(token.user_nick.as_deref(), Some("buyer01"));
    }

    #[tokio::test]
    async fn test_refresh_access_token_unwraps_wrapper() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/auth/token/refresh"))
            .and(body_string_contains("refresh_token=old-refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "data": {"access_token": "fresh", "expire_time": "1700086400000"}
            })))
            .mount(&server)
            .await;

        let api = AliexpressApi::new(test_config(&server.uri()));
        let token = api.refresh_access_token("old-refresh").await.unwrap();
        assert_eq!(token.access_token.as_deref(), Some("fresh"));
        assert_eq!(token.expire_time, Some(1_700_086_400_000));
    }

    #[tokio::test]
    async fn test_rejected_code_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/auth/token/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "IllegalAccessToken",
                "message": "The specified access token is invalid or expired"
            })))
            .mount(&server)
            .await;

        let api = AliexpressApi::new(test_config(&server.uri()));
        match api.generate_access_token("used-code", None).await {
            Err(ServiceError::Api(crate::clients::ApiError::Provider(e))) => {
                assert_eq!(e.code, "IllegalAccessToken");
                assert_eq!(e.message, "The specified access token is invalid or expired");
            }
            other => panic!("Expected provider error, got: {other:?}"),
        }
    }
}
