//! OAuth token records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Token issued by `/auth/token/create` or `/auth/token/refresh`.
///
/// Every field is optional; the provider omits fields depending on the
/// account platform. `expires_in` and `refresh_expires_in` are relative
/// seconds, `expire_time` and `refresh_token_valid_time` are absolute
/// Unix timestamps in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TokenResponse {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub access_token: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub refresh_token: Option<String>,
    #[serde(deserialize_with = "lenient::opt_integer")]
    pub expires_in: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_integer")]
    pub refresh_expires_in: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_integer")]
    pub expire_time: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_integer")]
    pub refresh_token_valid_time: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub account_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub seller_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub user_nick: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub havana_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub account_platform: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub account: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub sp: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub locale: Option<String>,
}

impl TokenResponse {
    /// Returns `true` if the refresh token can still be used.
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some() && self.refresh_expires_in.is_some_and(|secs| secs > 0)
    }
}
