// Records produced by one poll cycle. Nothing here is cached or persisted;
// each cycle builds fresh values from the provider responses.

use serde::{Deserialize, Serialize};

/// One entry of a `getSignaturesForAddress` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    pub signature: String,
    pub slot: u64,
    pub block_time: Option<i64>,
    /// The listing already reports the transaction as failed.
    pub failed: bool,
}

impl SignatureInfo {
    pub fn new(signature: impl Into<String>, slot: u64) -> Self {
        Self {
            signature: signature.into(),
            slot,
            block_time: None,
            failed: false,
        }
    }
}

/// Detail for a single transaction, as fetched by signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub signature: String,
    pub slot: u64,
    pub block_time: Option<i64>,
    /// Fee in lamports.
    pub fee: u64,
    /// Error reported by the runtime; `None` means the transaction succeeded.
    pub error: Option<String>,
    pub pre_balances: Vec<u64>,
    pub post_balances: Vec<u64>,
}

impl TransactionRecord {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    /// Lamport change of the first account (the fee payer), if both balance lists are present.
    pub fn primary_balance_change(&self) -> Option<i128> {
        let pre = *self.pre_balances.first()?;
        let post = *self.post_balances.first()?;
        Some(post as i128 - pre as i128)
    }
}
