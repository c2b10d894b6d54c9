//! Locating the token record in an OAuth token response.

use serde_json::Value;

use crate::clients::envelope::{is_success_code, snippet, value_to_string};
use crate::clients::{ApiError, ProviderError, ResponseShapeError};

/// Keys that may wrap the token record, in lookup order.
pub const TOKEN_WRAPPER_KEYS: [&str; 3] = ["token_response", "result", "data"];

/// Extracts the token record from a `/auth/token/*` response body.
///
/// The token endpoints do not use the `<method>_response` envelope. The
/// record is the body itself when it carries `access_token`, otherwise the
/// first object found under one of [`TOKEN_WRAPPER_KEYS`]. A top-level
/// `code` outside the success set is a provider rejection.
///
/// # Errors
///
/// Returns [`ApiError::Provider`] for a non-success `code` and
/// [`ApiError::ResponseShape`] if the body is not an object.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::auth::extract_token_payload;
/// use serde_json::json;
///
/// let body = json!({"code": "0", "data": {"access_token": "abc"}});
/// let token = extract_token_payload(body).unwrap();
/// assert_eq!(token["access_token"], "abc");
/// ```
pub fn extract_token_payload(body: Value) -> Result<Value, ApiError> {
    let mut map = match body {
        Value::Object(map) => map,
        other => {
            return Err(ResponseShapeError::NotAnObject {
                snippet: snippet(&other),
            }
            .into())
        }
    };

    if let Some(code) = map.get("code").filter(|code| !code.is_null()) {
        if !is_success_code(code) {
            let message = map
                .get("msg")
                .or_else(|| map.get("message"))
                .filter(|msg| !msg.is_null())
                .map_or_else(|| "Unknown error".to_string(), value_to_string);
            let mut error = ProviderError::new(value_to_string(code), message);
            error.request_id = map.get("request_id").map(value_to_string);
            tracing::error!(code = %error.code, message = %error.message, "Token request rejected");
            return Err(error.into());
        }
    }

    if map.contains_key("access_token") {
        return Ok(Value::Object(map));
    }

    let wrapper = TOKEN_WRAPPER_KEYS
        .iter()
        .find(|key| map.get(**key).is_some_and(Value::is_object));
    Ok(match wrapper {
        Some(key) => map.remove(*key).unwrap_or(Value::Null),
        None => Value::Object(map),
    })
}
