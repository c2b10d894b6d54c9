//! Buyer freight calculation records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// An amount of money as the logistics endpoints report it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Money {
    #[serde(deserialize_with = "lenient::string")]
    pub amount: String,
    /// Amount in the currency's minor unit.
    #[serde(deserialize_with = "lenient::integer")]
    pub cent: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub currency_code: String,
}

/// A shipping service offered for the requested products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FreightOption {
    #[serde(deserialize_with = "lenient::string")]
    pub service_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub estimated_delivery_time: String,
    #[serde(deserialize_with = "lenient::nested")]
    pub freight: Money,
}

/// Result of `aliexpress.logistics.buyer.freight.calculate`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BuyerFreightCalculateResponse {
    #[serde(deserialize_with = "lenient::boolean")]
    pub success: bool,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub error_desc: Option<String>,
    #[serde(
        rename = "aeop_freight_calculate_result_dtos",
        deserialize_with = "lenient::list"
    )]
    pub freight_options: Vec<FreightOption>,
}

impl BuyerFreightCalculateResponse {
    /// Returns the option with the lowest fee, if any.
    #[must_use]
    pub fn cheapest(&self) -> Option<&FreightOption> {
        self.freight_options.iter().min_by_key(|option| option.freight.cent)
    }
}
