//! Configuration types for the AliExpress API SDK.
//!
//! This module provides the configuration used to sign and dispatch
//! requests to the AliExpress Open Platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AliexpressConfig`]: The configuration struct holding all SDK settings
//! - [`AliexpressConfigBuilder`]: A builder for constructing [`AliexpressConfig`] instances
//! - [`AppKey`]: A validated app key newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`AccessToken`]: An OAuth access token with masked debug output
//! - [`ApiHost`]: A validated gateway host URL
//! - [`Language`], [`Currency`]: Response language and price currency
//! - [`locale`]: Builds provider locale strings such as `en_US`
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::{AliexpressConfig, AppKey, AppSecret, Currency, Language};
//!
//! let config = AliexpressConfig::builder()
//!     .app_key(AppKey::new("502123").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .language(Language::Fr)
//!     .currency(Currency::Eur)
//!     .tracking_id("my_tracking_id")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.locale(Some("fr")), "fr_FR");
//! ```

mod locale;
mod newtypes;

pub use locale::{
    locale, Currency, Language, LinkType, ProductType, SortBy, DEFAULT_LOCALE_COUNTRY,
};
pub use newtypes::{AccessToken, ApiHost, AppKey, AppSecret};

pub use crate::auth::signature::SignMethod;

use std::time::Duration;

use crate::error::ConfigError;

/// Partner identifier sent with every request.
pub const DEFAULT_PARTNER_ID: &str = concat!("iop-sdk-rust-", env!("CARGO_PKG_VERSION"));

/// Client-wide request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the AliExpress API SDK.
///
/// Holds the credentials, the gateway host and the defaults applied to
/// every call (language, currency, tracking id, access token).
///
/// # Thread Safety
///
/// `AliexpressConfig` is `Clone`, `Send`, and `Sync`. Nothing in it changes
/// after [`AliexpressConfigBuilder::build`].
///
/// # Example
///
/// ```rust
/// use aliexpress_api::{AliexpressConfig, AppKey, AppSecret, SignMethod};
///
/// let config = AliexpressConfig::builder()
///     .app_key(AppKey::new("502123").unwrap())
///     .app_secret(AppSecret::new("my-secret").unwrap())
///     .sign_method(SignMethod::Md5)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.sign_method(), SignMethod::Md5);
/// ```
#[derive(Clone, Debug)]
pub struct AliexpressConfig {
    app_key: AppKey,
    app_secret: AppSecret,
    api_host: ApiHost,
    sign_method: SignMethod,
    language: Language,
    currency: Currency,
    tracking_id: Option<String>,
    access_token: Option<AccessToken>,
    partner_id: String,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl AliexpressConfig {
    /// Creates a new builder for constructing an `AliexpressConfig`.
    #[must_use]
    pub fn builder() -> AliexpressConfigBuilder {
        AliexpressConfigBuilder::new()
    }

    /// Returns the app key.
    #[must_use]
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the gateway host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the signing method.
    #[must_use]
    pub const fn sign_method(&self) -> SignMethod {
        self.sign_method
    }

    /// Returns the default response language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the default price currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the affiliate tracking id, if configured.
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the partner id sent with every request.
    #[must_use]
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// Returns the client-wide request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the target language in the lower-case form request
    /// parameters use (`en`, `fr`, ...).
    #[must_use]
    pub fn target_language(&self) -> String {
        self.language.code().to_ascii_lowercase()
    }

    /// Builds a locale string from the configured language.
    #[must_use]
    pub fn locale(&self, country_code: Option<&str>) -> String {
        locale(self.language, country_code)
    }
}

// Verify AliexpressConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AliexpressConfig>();
};

/// Builder for constructing [`AliexpressConfig`] instances.
///
/// Required fields are `app_key` and `app_secret`.
///
/// # Defaults
///
/// - `api_host`: [`ApiHost::DEFAULT`]
/// - `sign_method`: [`SignMethod::Sha256`]
/// - `language`: [`Language::En`]
/// - `currency`: [`Currency::Usd`]
/// - `tracking_id`, `access_token`, `user_agent_prefix`: `None`
/// - `partner_id`: [`DEFAULT_PARTNER_ID`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
#[derive(Debug, Default)]
pub struct AliexpressConfigBuilder {
    app_key: Option<AppKey>,
    app_secret: Option<AppSecret>,
    api_host: Option<ApiHost>,
    sign_method: Option<SignMethod>,
    language: Option<Language>,
    currency: Option<Currency>,
    tracking_id: Option<String>,
    access_token: Option<AccessToken>,
    partner_id: Option<String>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl AliexpressConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app key (required).
    #[must_use]
    pub fn app_key(mut self, key: AppKey) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Points the client at a different gateway, e.g. a mock server.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the signing method.
    #[must_use]
    pub const fn sign_method(mut self, method: SignMethod) -> Self {
        self.sign_method = Some(method);
        self
    }

    /// Sets the default response language.
    #[must_use]
    pub const fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the default price currency.
    #[must_use]
    pub const fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the affiliate tracking id.
    #[must_use]
    pub fn tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    /// Sets the access token attached to session-scoped calls.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the partner id.
    #[must_use]
    pub fn partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Sets the client-wide request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AliexpressConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_key` or
    /// `app_secret` are not set.
    pub fn build(self) -> Result<AliexpressConfig, ConfigError> {
        let app_key = self
            .app_key
            .ok_or(ConfigError::MissingRequiredField { field: "app_key" })?;
        let app_secret = self
            .app_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "app_secret",
            })?;

        Ok(AliexpressConfig {
            app_key,
            app_secret,
            api_host: self.api_host.unwrap_or_default(),
            sign_method: self.sign_method.unwrap_or_default(),
            language: self.language.unwrap_or(Language::En),
            currency: self.currency.unwrap_or(Currency::Usd),
            tracking_id: self.tracking_id.filter(|id| !id.trim().is_empty()),
            access_token: self.access_token,
            partner_id: self
                .partner_id
                .unwrap_or_else(|| DEFAULT_PARTNER_ID.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
