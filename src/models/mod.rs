//! Typed records for API results.
//!
//! Every record binds leniently from the payload returned by
//! [`crate::clients::envelope::unwrap_envelope`]: unknown keys are
//! ignored, missing keys take defaults, and mismatched scalar types are
//! coerced where the field allows it. See [`FromPayload`].
//!
//! # Example
//!
//! ```rust
//! use aliexpress_api::models::{FromPayload, ProductsResponse};
//! use serde_json::json;
//!
//! let page = ProductsResponse::from_payload(&json!({
//!     "current_record_count": 1,
//!     "products": {"product": [{"product_id": "1005001234567890"}]}
//! }));
//! assert_eq!(page.products[0].product_id, 1_005_001_234_567_890);
//! ```

mod affiliate;
mod binding;
mod category;
mod dropshipping;
mod freight;
pub mod lenient;
mod oauth;
mod product;

pub use affiliate::{AffiliateLink, AffiliateLinksResponse, AffiliateOrder, OrderListResponse};
pub use binding::{bind_list, FromPayload};
pub use category::{
    filter_child_categories, filter_parent_categories, CategoriesResponse, Category, ChildCategory,
};
pub use dropshipping::{
    AeItemBaseInfoDto, AeItemSkuInfoDto, AeMultimediaInfoDto, AeSkuPropertyDto, AeVideoDto,
    DsCategory, DsCategoryGetResponse, DsCommissionOrder, DsCommissionOrderListResponse, DsOrder,
    DsOrderListResponse, DsOrderProduct, DsOrderTrackingGetResponse, DsProductGetResult,
    DsSearchProduct, DsTextSearchResult, DsTradeOrderGetResponse, ItemProperty, LogisticsInfoDto,
    ManufacturerInfo, OrderLogisticsInfo, PackageInfoDto, ProductIdConverterResult, StoreInfo,
    TrackingData, TrackingEvent, TrackingPackage, WholesalePriceTier,
};
pub use freight::{BuyerFreightCalculateResponse, FreightOption, Money};
pub use oauth::TokenResponse;
pub use product::{HotProductsResponse, Product, ProductsResponse};
