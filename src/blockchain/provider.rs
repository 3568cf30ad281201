use crate::error::MonitorError;
use crate::models::{SignatureInfo, TransactionRecord};
use crate::validation::Address;

/// The two ledger queries the poll loop needs from an RPC provider.
#[allow(async_fn_in_trait)]
pub trait TransactionProvider {
    /// Most recent signatures for `address`, newest first. `limit` is a page-size hint.
    async fn recent_signatures(
        &self,
        address: &Address,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, MonitorError>;

    /// Full detail for one signature. `Ok(None)` when the provider has no record of it.
    async fn transaction(&self, signature: &str) -> Result<Option<TransactionRecord>, MonitorError>;
}
