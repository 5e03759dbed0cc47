use super::common::{CItems, Discount};
use super::{non_negative, require, validate_quantity, Params};
use crate::error::ValidationError;
use crate::types::serde_ext::{int_bool, nullable_metadata, Metadata};
use crate::types::status::{CheckoutStatus, FeesAllocation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A payment session, as returned by the API.
///
/// All amounts are in minor units. Fields the API may send as `null` are
/// `Option`s so that an absent value is never confused with an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub amount: i64,
    pub currency: String,
    pub fees: i64,
    pub fees_on_merchant: i64,
    pub fees_on_customer: i64,
    pub pass_fees_to_customer: Option<bool>,
    pub chargily_pay_fees_allocation: FeesAllocation,
    pub status: CheckoutStatus,
    pub locale: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_metadata::deserialize")]
    pub metadata: Option<Metadata>,
    pub success_url: String,
    pub failure_url: Option<String>,
    pub webhook_endpoint: Option<String>,
    pub payment_method: Option<String>,
    pub invoice_id: Option<String>,
    pub customer_id: String,
    pub payment_link_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub shipping_address: Option<String>,
    #[serde(default, with = "int_bool")]
    pub collect_shipping_address: bool,
    pub discount: Option<Discount>,
    pub amount_without_discount: Option<i64>,
    pub checkout_url: String,
}

impl Checkout {
    pub fn is_paid(&self) -> bool {
        matches!(self.status, CheckoutStatus::Paid | CheckoutStatus::Succeeded)
    }
}

/// Body for creating a checkout.
///
/// A checkout is priced either by `items` or by `amount` + `currency`, never
/// both. At most one of `percentage_discount` and `amount_discount` may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CItems>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub success_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "discount_unset")]
    pub percentage_discount: Option<i64>,
    #[serde(skip_serializing_if = "discount_unset")]
    pub amount_discount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CheckoutParams {
    /// Checkout priced by line items.
    pub fn with_items(items: Vec<CItems>, success_url: impl Into<String>) -> Self {
        Self {
            items: Some(items),
            success_url: success_url.into(),
            ..Self::default()
        }
    }

    /// Checkout for a direct amount.
    pub fn with_amount(
        amount: i64,
        currency: impl Into<String>,
        success_url: impl Into<String>,
    ) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            success_url: success_url.into(),
            ..Self::default()
        }
    }

    pub fn customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn failure_url(mut self, url: impl Into<String>) -> Self {
        self.failure_url = Some(url.into());
        self
    }

    pub fn webhook_endpoint(mut self, url: impl Into<String>) -> Self {
        self.webhook_endpoint = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn shipping_address(mut self, address: impl Into<String>) -> Self {
        self.shipping_address = Some(address.into());
        self
    }

    pub fn collect_shipping_address(mut self, collect: bool) -> Self {
        self.collect_shipping_address = Some(collect);
        self
    }

    pub fn percentage_discount(mut self, percent: i64) -> Self {
        self.percentage_discount = Some(percent);
        self
    }

    pub fn amount_discount(mut self, amount: i64) -> Self {
        self.amount_discount = Some(amount);
        self
    }

    pub fn pass_fees_to_customer(mut self, pass: bool) -> Self {
        self.pass_fees_to_customer = Some(pass);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    fn has_items(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }
}

impl Params for CheckoutParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("success_url", &self.success_url)?;

        match (self.has_items(), self.amount) {
            (true, Some(_)) => return Err(ValidationError::ItemsAndAmount),
            (false, None) => return Err(ValidationError::MissingItemsOrAmount),
            (false, Some(amount)) => {
                non_negative("amount", amount)?;
                match self.currency.as_deref() {
                    Some(currency) => require("currency", currency)?,
                    None => return Err(ValidationError::MissingField("currency")),
                }
            }
            (true, None) => {}
        }
        for (index, item) in self.items.iter().flatten().enumerate() {
            require("items.price", &item.price)?;
            validate_quantity(index, item.quantity)?;
        }

        let percentage = self.percentage_discount.unwrap_or(0);
        let fixed = self.amount_discount.unwrap_or(0);
        non_negative("percentage_discount", percentage)?;
        non_negative("amount_discount", fixed)?;
        if percentage > 0 && fixed > 0 {
            return Err(ValidationError::ConflictingDiscounts);
        }
        if percentage > 100 {
            return Err(ValidationError::PercentageOutOfRange(percentage));
        }
        Ok(())
    }
}

/// A zero discount is the same as no discount and stays off the wire.
fn discount_unset(discount: &Option<i64>) -> bool {
    matches!(discount, None | Some(0))
}
