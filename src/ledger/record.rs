use serde::{Deserialize, Serialize};

/// A single signed entry in a category ledger.
///
/// Deposits carry a positive amount and withdrawals a negative one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

impl Record {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}
