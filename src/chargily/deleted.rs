use serde::{Deserialize, Serialize};

/// Acknowledgement returned when a customer, product or price is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: String,
    pub entity: String,
    pub livemode: bool,
    pub deleted: bool,
}
