//! Errors returned by the service façade.

use thiserror::Error;

use crate::clients::{ApiError, InvalidApiRequestError};

/// Error type for [`AliexpressApi`](crate::AliexpressApi) operations.
///
/// Wraps dispatch failures and adds the façade's own conventions: list
/// queries that come back empty are reported as "not found" rather than
/// as an empty success.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The call failed during dispatch or envelope unwrapping.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A product query matched nothing.
    #[error("No products found with current parameters")]
    ProductsNotFound,

    /// An order query matched nothing.
    #[error("No orders found for the specified parameters")]
    OrdersNotFound,

    /// The category listing was empty.
    #[error("No categories found")]
    CategoriesNotFound,

    /// Affiliate link generation needs a tracking id in the configuration.
    #[error("The tracking id is required for affiliate links")]
    MissingTrackingId,
}

impl From<InvalidApiRequestError> for ServiceError {
    fn from(error: InvalidApiRequestError) -> Self {
        Self::Api(ApiError::from(error))
    }
}
