//! Response envelope unwrapping.
//!
//! Successful calls come back wrapped in a `<method>_response` object whose
//! shape differs between endpoint families. [`unwrap_envelope`] walks a
//! fixed precedence chain to find the error code and the payload:
//!
//! 1. When the response key is missing, a top-level non-success `code` is a
//!    provider error; anything else is a shape error listing the keys found.
//! 2. The inner code is the first non-null of `resp_code`, `rsp_code`,
//!    `code`; a non-success value is a provider error whose message is the
//!    first non-null of `resp_msg`, `rsp_msg`, `msg`.
//! 3. The payload is the first present of `resp_result`, `result`, `data`,
//!    falling back to the inner object itself. A `resp_result` payload
//!    carrying its own non-success code is a provider error too.
//! 4. A payload object holding its own `result` is unwrapped once more.
//!
//! The payload is returned as-is; typing it is the binder's job.
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::clients::envelope::unwrap_envelope;
//! use serde_json::json;
//!
//! let raw = json!({"foo_response": {"resp_code": "0", "resp_result": {"a": 1}}});
//! let payload = unwrap_envelope(raw, "foo_response").unwrap();
//! assert_eq!(payload, json!({"a": 1}));
//! ```

use serde_json::{Map, Value};

use crate::clients::errors::{ApiError, ProviderError, ResponseShapeError};

const CODE_KEYS: [&str; 3] = ["resp_code", "rsp_code", "code"];
const MESSAGE_KEYS: [&str; 3] = ["resp_msg", "rsp_msg", "msg"];
const RESP_RESULT: &str = "resp_result";
const PAYLOAD_KEYS: [&str; 3] = [RESP_RESULT, "result", "data"];

/// Returns `true` for the code values the provider uses to signal success:
/// `0`, `"0"`, `200`, `"200"` and `"success"`.
///
/// Numeric codes compare by value, so `200.0` is success too.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_success_code(code: &Value) -> bool {
    match code {
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f == 200.0),
        Value::String(s) => matches!(s.as_str(), "0" | "200" | "success"),
        _ => false,
    }
}

/// Extracts the payload from a decoded response.
///
/// # Errors
///
/// - [`ApiError::Provider`] when the envelope carries a non-success code
/// - [`ApiError::ResponseShape`] when the response key is missing or the
///   envelope is not an object
pub fn unwrap_envelope(raw: Value, response_key: &str) -> Result<Value, ApiError> {
    let mut top = match raw {
        Value::Object(top) => top,
        other => {
            return Err(ResponseShapeError::NotAnObject {
                snippet: snippet(&other),
            }
            .into())
        }
    };

    let Some(inner) = top.remove(response_key) else {
        if let Some(code) = first_present(&top, &["code"]) {
            if !is_success_code(code) {
                return Err(provider_error(code, &top).into());
            }
        }
        return Err(ResponseShapeError::MissingKey {
            key: response_key.to_string(),
            available: top.keys().cloned().collect(),
        }
        .into());
    };

    let Value::Object(mut inner) = inner else {
        return Err(ResponseShapeError::InvalidEnvelope {
            key: response_key.to_string(),
        }
        .into());
    };

    if let Some(code) = first_present(&inner, &CODE_KEYS) {
        if !is_success_code(code) {
            let error = provider_error(code, &inner);
            tracing::error!(
                response_key,
                code = %error.code,
                message = %error.message,
                "Provider rejected the call"
            );
            return Err(error.into());
        }
    }

    let (source, payload) = PAYLOAD_KEYS
        .iter()
        .find_map(|key| inner.remove(*key).map(|value| (*key, value)))
        .unwrap_or_else(|| ("inner", Value::Object(inner)));

    // Affiliate endpoints report their status inside `resp_result`.
    if let (RESP_RESULT, Value::Object(result)) = (source, &payload) {
        if let Some(code) = first_present(result, &CODE_KEYS) {
            if !is_success_code(code) {
                let error = provider_error(code, result);
                tracing::error!(
                    response_key,
                    code = %error.code,
                    message = %error.message,
                    "Provider rejected the call"
                );
                return Err(error.into());
            }
        }
    }

    let payload = match payload {
        Value::Object(mut nested) if nested.contains_key("result") => {
            nested.remove("result").unwrap_or(Value::Null)
        }
        other => other,
    };

    tracing::debug!(response_key, kind = value_kind(&payload), "Extracted payload");
    Ok(payload)
}

/// Returns the first non-null value among `keys`.
fn first_present<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn provider_error(code: &Value, object: &Map<String, Value>) -> ProviderError {
    let message = first_present(object, &MESSAGE_KEYS)
        .map_or_else(|| "Unknown error".to_string(), value_to_string);
    ProviderError {
        request_id: object.get("request_id").map(value_to_string),
        ..ProviderError::new(value_to_string(code), message)
    }
}

/// Renders a scalar without the quotes `Value::to_string` adds to strings.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn snippet(value: &Value) -> String {
    value_to_string(value).chars().take(200).collect()
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
