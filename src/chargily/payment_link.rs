use super::common::{PItems, PItemsData};
use super::{require, validate_quantity, Params};
use crate::error::ValidationError;
use crate::types::serde_ext::{int_bool, metadata, Metadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reusable checkout template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub name: String,
    #[serde(default, with = "int_bool")]
    pub active: bool,
    pub after_completion_message: Option<String>,
    pub locale: String,
    pub pass_fees_to_customer: bool,
    #[serde(default, deserialize_with = "metadata::deserialize")]
    pub metadata: Metadata,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, with = "int_bool")]
    pub collect_shipping_address: bool,
    #[serde(default)]
    pub items: Vec<PItemsData>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentLinkParams {
    pub name: String,
    pub items: Vec<PItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "flag_option::serialize",
        deserialize_with = "flag_option::deserialize",
        default
    )]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentLinkParams {
    pub fn new(name: impl Into<String>, items: Vec<PItems>) -> Self {
        Self {
            name: name.into(),
            items,
            ..Self::default()
        }
    }

    pub fn after_completion_message(mut self, message: impl Into<String>) -> Self {
        self.after_completion_message = Some(message.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn pass_fees_to_customer(mut self, pass: bool) -> Self {
        self.pass_fees_to_customer = Some(pass);
        self
    }

    pub fn collect_shipping_address(mut self, collect: bool) -> Self {
        self.collect_shipping_address = Some(collect);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }
}

impl Params for CreatePaymentLinkParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        if self.items.is_empty() {
            return Err(ValidationError::MissingField("items"));
        }
        check_items(&self.items)
    }
}

/// Partial update of a payment link; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentLinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PItems>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_completion_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_fees_to_customer: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "flag_option::serialize",
        deserialize_with = "flag_option::deserialize",
        default
    )]
    pub collect_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl UpdatePaymentLinkParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn items(mut self, items: Vec<PItems>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn collect_shipping_address(mut self, collect: bool) -> Self {
        self.collect_shipping_address = Some(collect);
        self
    }
}

impl Params for UpdatePaymentLinkParams {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        match &self.items {
            Some(items) => check_items(items),
            None => Ok(()),
        }
    }
}

fn check_items(items: &[PItems]) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        require("items.price", &item.price)?;
        validate_quantity(index, item.quantity)?;
    }
    Ok(())
}

/// `Option<bool>` sent as `0`/`1`.
mod flag_option {
    use super::int_bool;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(flag) => int_bool::serialize(flag, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Flag(#[serde(with = "int_bool")] bool);

        Ok(Option::<Flag>::deserialize(deserializer)?.map(|Flag(flag)| flag))
    }
}
