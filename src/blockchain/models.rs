use crate::error::MonitorError;
use crate::models::{SignatureInfo, TransactionRecord};
use solana_client::rpc_response::RpcConfirmedTransactionStatusWithSignature;
use solana_transaction_status::EncodedConfirmedTransactionWithStatusMeta;
use tracing::warn;

/// Convert a `getTransaction` response into a display record.
///
/// Fee, error flag and balances all live in the status meta, so a response
/// without meta cannot be rendered and is reported as a decode error.
pub fn extract_record(
    signature: &str,
    tx_data: &EncodedConfirmedTransactionWithStatusMeta,
) -> Result<TransactionRecord, MonitorError> {
    let meta = match &tx_data.transaction.meta {
        Some(meta) => meta,
        None => {
            warn!("Transaction {} has no metadata", signature);
            return Err(MonitorError::Decode(format!(
                "transaction {} has no status meta",
                signature
            )));
        }
    };

    if meta.pre_balances.len() != meta.post_balances.len() {
        warn!(
            "Transaction {} has {} pre-balances but {} post-balances",
            signature,
            meta.pre_balances.len(),
            meta.post_balances.len()
        );
    }

    Ok(TransactionRecord {
        signature: signature.to_string(),
        slot: tx_data.slot,
        block_time: tx_data.block_time,
        fee: meta.fee,
        error: meta.err.as_ref().map(|err| err.to_string()),
        pre_balances: meta.pre_balances.clone(),
        post_balances: meta.post_balances.clone(),
    })
}

pub fn extract_signature(status: &RpcConfirmedTransactionStatusWithSignature) -> SignatureInfo {
    SignatureInfo {
        signature: status.signature.clone(),
        slot: status.slot,
        block_time: status.block_time,
        failed: status.err.is_some(),
    }
}
