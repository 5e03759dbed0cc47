use super::common::Wallet;
use serde::{Deserialize, Serialize};

/// Account balance across all currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub entity: String,
    pub livemode: bool,
    pub wallets: Vec<Wallet>,
}

impl Balance {
    /// Wallet for `currency`, matched case-insensitively.
    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|wallet| wallet.currency.eq_ignore_ascii_case(currency))
    }
}
