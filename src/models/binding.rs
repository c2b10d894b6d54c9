//! Binding unwrapped payloads to typed records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::lenient::unwrap_list;

/// Builds a typed record from an unwrapped payload.
///
/// Binding never fails: a payload that is not an object produces the
/// default record, unknown keys are dropped and missing keys keep their
/// defaults.
///
/// Every `DeserializeOwned + Default` type gets this for free; model
/// structs opt into full leniency by marking themselves
/// `#[serde(default)]` and routing fields through [`super::lenient`].
///
/// # Example
///
/// ```rust
/// use aliexpress_api::models::{AffiliateLink, FromPayload};
/// use serde_json::json;
///
/// let link = AffiliateLink::from_payload(&json!({
///     "promotion_link": "https://s.click.aliexpress.com/e/_abc",
///     "unexpected_field": 1
/// }));
/// assert_eq!(link.promotion_link, "https://s.click.aliexpress.com/e/_abc");
/// assert_eq!(link.source_value, "");
/// ```
pub trait FromPayload: Sized {
    /// Binds `payload`, falling back to defaults.
    fn from_payload(payload: &Value) -> Self;
}

impl<T: DeserializeOwned + Default> FromPayload for T {
    fn from_payload(payload: &Value) -> Self {
        if !payload.is_object() {
            if !payload.is_null() {
                tracing::warn!(
                    target_type = std::any::type_name::<T>(),
                    "Payload is not an object; using defaults"
                );
            }
            return T::default();
        }
        T::deserialize(payload).unwrap_or_else(|error| {
            tracing::warn!(
                target_type = std::any::type_name::<T>(),
                %error,
                "Payload did not bind; using defaults"
            );
            T::default()
        })
    }
}

/// Binds a sequence payload.
///
/// Accepts a bare array or an object wrapping exactly one array (the
/// provider's `{"category": [...]}` convention). Anything else binds to an
/// empty list.
#[must_use]
pub fn bind_list<T: FromPayload>(payload: &Value) -> Vec<T> {
    unwrap_list(payload)
        .map(|items| items.iter().map(T::from_payload).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Known {
        known_field: String,
        other: Option<String>,
    }

    #[test]
    fn test_empty_mapping_yields_defaults() {
        assert_eq!(Known::from_payload(&json!({})), Known::default());
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let bound = Known::from_payload(&json!({"unexpected_field": 1, "known_field": "x"}));
        assert_eq!(bound.known_field, "x");
        assert_eq!(bound.other, None);
    }

    #[test]
    fn test_non_object_payload_yields_defaults() {
        assert_eq!(Known::from_payload(&json!("text")), Known::default());
        assert_eq!(Known::from_payload(&json!([1, 2])), Known::default());
        assert_eq!(Known::from_payload(&Value::Null), Known::default());
    }

    #[test]
    fn test_type_mismatch_falls_back_to_defaults() {
        // `known_field` has no lenient adapter, so a number fails to bind.
        assert_eq!(Known::from_payload(&json!({"known_field": 5})), Known::default());
    }

    #[test]
    fn test_bind_list_accepts_array_and_wrapper() {
        let bare: Vec<Known> = bind_list(&json!([{"known_field": "a"}, {"known_field": "b"}]));
        assert_eq!(bare.len(), 2);

        let wrapped: Vec<Known> = bind_list(&json!({"item": [{"known_field": "c"}]}));
        assert_eq!(wrapped[0].known_field, "c");

        let neither: Vec<Known> = bind_list(&json!({"known_field": "d"}));
        assert!(neither.is_empty());
    }
}
