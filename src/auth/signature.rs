//! Request signatures for the AliExpress Open Platform.
//!
//! Every request carries a `sign` parameter computed as
//! `uppercase_hex(HMAC(app_secret, canonical_string))`, where the canonical
//! string is the concatenation of `key + value` for every signed parameter
//! in byte-wise key order, prefixed with the endpoint name when that name is
//! path-style (contains `/`, as the `/auth/token/*` endpoints do).
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use aliexpress_api::auth::signature::sign;
//!
//! let mut params = HashMap::new();
//! params.insert("app_key", "12345");
//! params.insert("timestamp", "1700000000000");
//!
//! let signature = sign("secret", "aliexpress.affiliate.link.generate", &params);
//! assert_eq!(signature.len(), 64);
//! assert!(signature.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
//! ```

use std::fmt;
use std::str::FromStr;

use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::Sha256;

use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;
type HmacMd5 = Hmac<Md5>;

/// Keyed hash used for request signatures.
///
/// `Sha256` is the default for every integration. `Md5` exists for legacy
/// credentials that were registered against the older signing scheme; which
/// one a credential pair needs is decided by the provider, not inferred here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignMethod {
    /// HMAC-SHA256.
    #[default]
    Sha256,
    /// HMAC-MD5 (legacy).
    Md5,
}

impl SignMethod {
    /// Returns the value sent in the `sign_method` system parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Md5 => "md5",
        }
    }
}

impl fmt::Display for SignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "hmac-sha256" => Ok(Self::Sha256),
            "md5" | "hmac-md5" => Ok(Self::Md5),
            _ => Err(ConfigError::UnknownCode {
                kind: "sign method",
                value: s.to_string(),
            }),
        }
    }
}

/// Builds the string that gets signed.
///
/// Parameters are sorted by key bytes and concatenated without separators.
/// Path-style endpoint names are prepended verbatim.
#[must_use]
pub fn canonical_string<I, K, V>(endpoint: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = params.into_iter().collect();
    pairs.sort_by(|a, b| a.0.as_ref().as_bytes().cmp(b.0.as_ref().as_bytes()));

    let mut canonical = String::new();
    if endpoint.contains('/') {
        canonical.push_str(endpoint);
    }
    for (key, value) in &pairs {
        canonical.push_str(key.as_ref());
        canonical.push_str(value.as_ref());
    }
    canonical
}

/// Signs `params` for `endpoint` with HMAC-SHA256.
///
/// `params` must not contain the `sign` parameter itself; values must
/// already be in their wire (string) form. Iteration order of `params`
/// does not affect the result.
#[must_use]
pub fn sign<I, K, V>(secret: &str, endpoint: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    sign_with(SignMethod::Sha256, secret, endpoint, params)
}

/// Signs `params` for `endpoint` with the given keyed hash.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts keys of any size
pub fn sign_with<I, K, V>(method: SignMethod, secret: &str, endpoint: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let canonical = canonical_string(endpoint, params);
    match method {
        SignMethod::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
                .expect("HMAC can take key of any size");
            mac.update(canonical.as_bytes());
            hex::encode_upper(mac.finalize().into_bytes())
        }
        SignMethod::Md5 => {
            let mut mac = HmacMd5::new_from_slice(secret.as_bytes())
                .expect("HMAC can take key of any size");
            mac.update(canonical.as_bytes());
            hex::encode_upper(mac.finalize().into_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_sign_matches_known_hmac_sha256_vector() {
        // canonical string is "message"; HMAC-SHA256("key", "message")
        let sig = sign("key", "aliexpress.test", [("mess", "age")]);
        assert_eq!(
            sig,
            "6E9EF29B75FFFC5B7ABAE527D58FDADB2FE42E7219011976917343065F58ED4A"
        );
    }

    #[test]
    fn test_sign_with_md5_matches_known_vector() {
        let sig = sign_with(
            SignMethod::Md5,
            "key",
            "aliexpress.test",
            [("The quick brown fox jumps over the lazy dog", "")],
        );
        assert_eq!(sig, "80070713463E7749B90C2DC24911E275");
    }

    #[test]
    fn test_canonical_string_sorts_by_key() {
        let canonical = canonical_string(
            "aliexpress.ds.product.get",
            [("timestamp", "1"), ("app_key", "k"), ("method", "m")],
        );
        assert_eq!(canonical, "app_keykmethodmtimestamp1");
    }

    #[test]
    fn test_canonical_string_sorts_by_bytes_not_case_insensitively() {
        let canonical = canonical_string("a.b", [("b", "1"), ("B", "2"), ("a", "3")]);
        assert_eq!(canonical, "B2a3b1");
    }

    #[test]
    fn test_canonical_string_prefixes_path_style_endpoints() {
        let canonical = canonical_string("/auth/token/create", [("code", "abc"), ("app_key", "k")]);
        assert_eq!(canonical, "/auth/token/createapp_keykcodeabc");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let params = [("app_key", "123"), ("timestamp", "1700000000000")];
        let first = sign("secret", "aliexpress.ds.product.get", params);
        let second = sign("secret", "aliexpress.ds.product.get", params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_is_independent_of_insertion_order() {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        let pairs = [
            ("app_key", "123"),
            ("format", "json"),
            ("method", "aliexpress.ds.product.get"),
            ("sign_method", "sha256"),
            ("timestamp", "1700000000000"),
        ];
        for (k, v) in pairs {
            forward.insert(k, v);
        }
        for (k, v) in pairs.iter().rev() {
            reverse.insert(*k, *v);
        }
        let sorted: BTreeMap<_, _> = pairs.into_iter().collect();

        let a = sign("secret", "aliexpress.ds.product.get", &forward);
        let b = sign("secret", "aliexpress.ds.product.get", &reverse);
        let c = sign("secret", "aliexpress.ds.product.get", &sorted);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_sign_with_empty_params_is_stable_and_non_empty() {
        let empty: [(&str, &str); 0] = [];
        let dotted = sign("secret", "aliexpress.ds.product.get", empty);
        assert_eq!(dotted.len(), 64);
        assert_eq!(dotted, sign("secret", "other.endpoint", empty));

        let path_style = sign("secret", "/auth/token/create", empty);
        assert_eq!(path_style.len(), 64);
        assert_ne!(path_style, dotted);
    }

    #[test]
    fn test_sign_output_is_uppercase_hex() {
        let sig = sign("secret", "a.b", [("k", "v")]);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_different_secrets_produce_different_signatures() {
        let a = sign("secret-a", "a.b", [("k", "v")]);
        let b = sign("secret-b", "a.b", [("k", "v")]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sign_method_wire_names() {
        assert_eq!(SignMethod::default(), SignMethod::Sha256);
        assert_eq!(SignMethod::Sha256.to_string(), "sha256");
        assert_eq!("MD5".parse::<SignMethod>().unwrap(), SignMethod::Md5);
        assert!("sha1".parse::<SignMethod>().is_err());
    }
}
