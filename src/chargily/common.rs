use crate::types::serde_ext::{int_bool, metadata, nullable_metadata, Metadata};
use crate::types::status::DiscountType;
use serde::{Deserialize, Serialize};

/// Postal address; every part is optional and left out when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
            && self.country.is_none()
    }
}

/// Balance held in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub currency: String,
    pub balance: i64,
    /// Decimal string, e.g. `"1250.00"`.
    pub ready_for_payout: String,
    pub on_hold: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountType,
    pub value: i64,
}

impl Discount {
    pub fn percentage(value: i64) -> Self {
        Self {
            kind: DiscountType::Percentage,
            value,
        }
    }

    pub fn fixed(value: i64) -> Self {
        Self {
            kind: DiscountType::Fixed,
            value,
        }
    }
}

/// A checkout line in a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CItems {
    /// Price id.
    pub price: String,
    pub quantity: i64,
}

impl CItems {
    pub fn new(price: impl Into<String>, quantity: i64) -> Self {
        Self {
            price: price.into(),
            quantity,
        }
    }
}

/// A checkout line as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItems {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    pub quantity: i64,
    pub currency: String,
    #[serde(default, deserialize_with = "metadata::deserialize")]
    pub metadata: Metadata,
    pub created_at: i64,
    pub updated_at: i64,
    pub product_id: String,
}

/// A payment link line in a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PItems {
    pub price: String,
    pub quantity: i64,
    #[serde(default)]
    pub adjustable_quantity: bool,
}

impl PItems {
    pub fn new(price: impl Into<String>, quantity: i64) -> Self {
        Self {
            price: price.into(),
            quantity,
            adjustable_quantity: false,
        }
    }

    pub fn adjustable(mut self) -> Self {
        self.adjustable_quantity = true;
        self
    }
}

/// A payment link line as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PItemsData {
    pub id: String,
    pub entity: String,
    pub amount: i64,
    pub quantity: i64,
    #[serde(default, with = "int_bool")]
    pub adjustable_quantity: bool,
    pub currency: String,
    #[serde(default, deserialize_with = "nullable_metadata::deserialize")]
    pub metadata: Option<Metadata>,
    pub created_at: i64,
    pub updated_at: i64,
    pub product_id: String,
}
