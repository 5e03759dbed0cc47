use super::{non_negative, require, Params};
use crate::error::ValidationError;
use crate::types::serde_ext::{metadata, Metadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A price attached to a product, in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub amount: i64,
    pub currency: String,
    pub product_id: String,
    #[serde(default, deserialize_with = "metadata::deserialize")]
    pub metadata: Metadata,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Body for creating a price. `amount` is always sent, even when zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPriceParams {
    pub amount: i64,
    pub currency: String,
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ProductPriceParams {
    pub fn new(amount: i64, currency: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            product_id: product_id.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }
}

impl Params for ProductPriceParams {
    fn validate(&self) -> Result<(), ValidationError> {
        non_negative("amount", self.amount)?;
        require("currency", &self.currency)?;
        require("product_id", &self.product_id)
    }
}

/// Prices are immutable apart from their metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePriceMetaDataParams {
    pub metadata: Metadata,
}

impl UpdatePriceMetaDataParams {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

impl Params for UpdatePriceMetaDataParams {}
