//! Request and response models for the Chargily Pay v2 API.
//!
//! Parameter types implement [`chargily::Params`], which validates an object
//! before it is serialized. Response bodies are turned into entities with
//! [`chargily::decode`], and list endpoints with [`chargily::decode_page`].

pub mod chargily;
pub mod client;
pub mod error;
pub mod logger;
pub mod types;

pub use chargily::{decode, decode_page, Params};
pub use client::{ChargilyClient, Mode};
pub use error::{DecodeError, Error, Result, ValidationError};
pub use types::pagination::{ListParams, RetrieveAll};
pub use types::status::{CheckoutStatus, DiscountType, FeesAllocation};

pub const VERSION: &str = match option_env!("CHARGILY_PKG_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
