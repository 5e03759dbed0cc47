pub mod balance;
pub mod checkout;
pub mod common;
pub mod customer;
pub mod deleted;
pub mod payment_link;
pub mod price;
pub mod product;

pub use balance::Balance;
pub use checkout::{Checkout, CheckoutParams};
pub use common::{Address, CItems, CheckoutItems, Discount, PItems, PItemsData, Wallet};
pub use customer::{CreateCustomerParams, Customer, UpdateCustomerParams};
pub use deleted::Deleted;
pub use payment_link::{CreatePaymentLinkParams, PaymentLink, UpdatePaymentLinkParams};
pub use price::{ProductPrice, ProductPriceParams, UpdatePriceMetaDataParams};
pub use product::{CreateProductParams, Product, UpdateProductParams};

use crate::error::{DecodeError, Result, ValidationError};
use crate::types::pagination::{ListParams, RetrieveAll};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A request body (or query) that is checked before it is serialized.
pub trait Params: Serialize {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    fn to_value(&self) -> Result<Value> {
        self.validate().inspect_err(|err| debug!("rejected params: {}", err))?;
        Ok(serde_json::to_value(self)?)
    }

    fn to_json(&self) -> Result<Vec<u8>> {
        self.validate().inspect_err(|err| debug!("rejected params: {}", err))?;
        Ok(serde_json::to_vec(self)?)
    }
}

impl Params for ListParams {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.check()
    }
}

/// Decodes a response body into `T`, reporting the failing field path.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> std::result::Result<T, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de)
        .map_err(DecodeError::from)
        .inspect_err(|err| {
            warn!(
                "cannot decode {} ({} bytes): {}",
                std::any::type_name::<T>(),
                bytes.len(),
                err
            )
        })?;
    de.end().map_err(|err| DecodeError::new(".", err.to_string()))?;
    Ok(value)
}

/// Decodes a list response; the envelope checks itself while decoding.
pub fn decode_page<T: DeserializeOwned>(
    bytes: &[u8],
) -> std::result::Result<RetrieveAll<T>, DecodeError> {
    let page: RetrieveAll<T> = decode(bytes)?;
    debug!(
        "decoded page {}/{} with {} items",
        page.current_page,
        page.last_page,
        page.len()
    );
    Ok(page)
}

pub(crate) fn validate_quantity(
    index: usize,
    quantity: i64,
) -> std::result::Result<(), ValidationError> {
    if quantity < 1 {
        return Err(ValidationError::InvalidQuantity { index, quantity });
    }
    Ok(())
}

pub(crate) fn require(
    field: &'static str,
    value: &str,
) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &'static str, value: i64) -> std::result::Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// `created_at`/`updated_at` as UTC datetimes; `None` when out of range.
macro_rules! impl_timestamps {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                pub fn created(&self) -> Option<DateTime<Utc>> {
                    DateTime::from_timestamp(self.created_at, 0)
                }

                pub fn updated(&self) -> Option<DateTime<Utc>> {
                    DateTime::from_timestamp(self.updated_at, 0)
                }
            }
        )+
    };
}

impl_timestamps!(
    Customer,
    Product,
    ProductPrice,
    Checkout,
    CheckoutItems,
    PaymentLink,
    PItemsData,
);
