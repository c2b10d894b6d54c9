//! Request descriptors for the AliExpress Open Platform.
//!
//! Every remote operation is described by the same value type: an endpoint
//! name, a bag of application parameters, optional file attachments and an
//! optional table that renames internal parameter names to their wire names.
//! Use [`ApiRequest::builder`] to construct one.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::time::Duration;

use crate::clients::errors::InvalidApiRequestError;

/// Parameter names the dispatcher sets itself.
pub const SYSTEM_PARAMS: [&str; 8] = [
    "app_key",
    "format",
    "method",
    "partner_id",
    "sign",
    "sign_method",
    "timestamp",
    "access_token",
];

/// A file attached to a multipart request.
#[derive(Clone, PartialEq, Eq)]
pub struct FileItem {
    /// File name sent in the part's `Content-Disposition`.
    pub filename: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl FileItem {
    /// Creates a new file attachment.
    #[must_use]
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

impl fmt::Debug for FileItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileItem")
            .field("filename", &self.filename)
            .field("len", &self.content.len())
            .finish()
    }
}

/// A request to be dispatched to the AliExpress Open Platform.
///
/// Values are held in their wire (string) form. Parameters that were never
/// set are simply absent; there is no "null" value on the wire.
///
/// # Example
///
/// ```rust
/// use aliexpress_api::clients::ApiRequest;
///
/// let request = ApiRequest::builder("aliexpress.ds.product.get")
///     .param("product_id", "1005001234567890")
///     .param("ship_to_country", "US")
///     .param_opt("province_code", None::<&str>)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.endpoint, "aliexpress.ds.product.get");
/// assert_eq!(request.params.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The remote operation name, dotted or path-style.
    pub endpoint: String,
    /// Application parameters keyed by internal name.
    pub params: BTreeMap<String, String>,
    /// Multipart attachments keyed by parameter name.
    pub files: BTreeMap<String, FileItem>,
    /// Internal name to wire name renames.
    pub translations: HashMap<String, String>,
    /// Overrides the client-wide timeout for this request.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    /// Creates a new builder for the given endpoint.
    #[must_use]
    pub fn builder(endpoint: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(endpoint)
    }

    /// Returns `true` when the request carries file attachments.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        !self.files.is_empty()
    }

    /// Returns `true` for path-style endpoints such as `/auth/token/create`.
    #[must_use]
    pub fn is_path_style(&self) -> bool {
        self.endpoint.contains('/')
    }

    /// Returns the application parameters under their wire names.
    #[must_use]
    pub fn application_params(&self) -> BTreeMap<String, String> {
        self.params
            .iter()
            .map(|(name, value)| (self.wire_name(name).to_string(), value.clone()))
            .collect()
    }

    /// Returns the wire name for an internal parameter name.
    #[must_use]
    pub fn wire_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.translations.get(name).map_or(name, String::as_str)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiRequestError`] if:
    /// - the endpoint name is empty
    /// - a parameter or file uses a system parameter name
    /// - two parameters or files share a wire name, after translation
    pub fn verify(&self) -> Result<(), InvalidApiRequestError> {
        if self.endpoint.trim().is_empty() {
            return Err(InvalidApiRequestError::MissingEndpoint);
        }

        for name in self.params.keys().chain(self.files.keys()) {
            let wire = self.wire_name(name);
            if SYSTEM_PARAMS.contains(&wire) {
                return Err(InvalidApiRequestError::ReservedParameter {
                    name: wire.to_string(),
                });
            }
        }

        let mut wire_names = HashSet::new();
        for name in self.params.keys().chain(self.files.keys()) {
            let wire = self.wire_name(name);
            if !wire_names.insert(wire) {
                return Err(InvalidApiRequestError::DuplicateParameter {
                    name: wire.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    endpoint: String,
    params: BTreeMap<String, String>,
    files: BTreeMap<String, FileItem>,
    translations: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl ApiRequestBuilder {
    fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: BTreeMap::new(),
            files: BTreeMap::new(),
            translations: HashMap::new(),
            timeout: None,
        }
    }

    /// Sets an application parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Sets an application parameter when `value` is `Some`; `None` leaves
    /// the parameter out of the request entirely.
    #[must_use]
    pub fn param_opt<T: ToString>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Sets a list-valued parameter, joined with commas.
    ///
    /// An empty list leaves the parameter out.
    #[must_use]
    pub fn param_list<I, T>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if joined.is_empty() {
            self
        } else {
            self.param(name, joined)
        }
    }

    /// Attaches a file; the request is then sent as `multipart/form-data`.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, file: FileItem) -> Self {
        self.files.insert(name.into(), file);
        self
    }

    /// Sends the internal parameter `internal` under the wire name `wire`.
    #[must_use]
    pub fn translate(mut self, internal: impl Into<String>, wire: impl Into<String>) -> Self {
        self.translations.insert(internal.into(), wire.into());
        self
    }

    /// Overrides the client-wide timeout for this request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ApiRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiRequestError`] if the request fails validation.
    pub fn build(self) -> Result<ApiRequest, InvalidApiRequestError> {
        let request = ApiRequest {
            endpoint: self.endpoint,
            params: self.params,
            files: self.files,
            translations: self.translations,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}
