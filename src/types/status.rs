//! Enumerated wire strings that tolerate values added upstream.
//!
//! Each enum keeps unrecognized strings in an `Other` variant and writes them
//! back unchanged, so a new status never turns into a decode failure.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this crate does not know yet, kept verbatim.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => $name::$variant,)+
                    _ => {
                        log::debug!("unrecognized {} value {:?}", stringify!($name), raw);
                        $name::Other(raw)
                    }
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $name::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Lifecycle state of a checkout.
    CheckoutStatus {
        Pending => "pending",
        Processing => "processing",
        Paid => "paid",
        Succeeded => "succeeded",
        Failed => "failed",
        Canceled => "canceled",
        Expired => "expired",
    }
}

impl CheckoutStatus {
    /// True once the checkout can no longer change state.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            CheckoutStatus::Paid
                | CheckoutStatus::Succeeded
                | CheckoutStatus::Failed
                | CheckoutStatus::Canceled
                | CheckoutStatus::Expired
        )
    }
}

open_enum! {
    /// How a discount `value` is read.
    DiscountType {
        Percentage => "percentage",
        Fixed => "fixed",
    }
}

open_enum! {
    /// Who pays the Chargily fees on a checkout.
    FeesAllocation {
        Customer => "customer",
        Merchant => "merchant",
        Split => "split",
    }
}
