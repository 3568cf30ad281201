use crate::blockchain::models::{extract_record, extract_signature};
use crate::blockchain::provider::TransactionProvider;
use crate::config::{endpoint_host, Config};
use crate::error::MonitorError;
use crate::models::{SignatureInfo, TransactionRecord};
use crate::validation::Address;
use serde_json::json;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_client::rpc_request::{RpcError, RpcRequest};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Signature;
use solana_transaction_status::{EncodedConfirmedTransactionWithStatusMeta, UiTransactionEncoding};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Server error codes that mean the node cannot serve the transaction, not that it failed.
const TRANSACTION_HISTORY_NOT_AVAILABLE: i64 = -32011;
const UNSUPPORTED_TRANSACTION_VERSION: i64 = -32015;

/// Highest transaction version we ask the node to return. Without it, versioned
/// transactions come back as errors instead of detail.
const MAX_SUPPORTED_TRANSACTION_VERSION: u8 = 0;

pub struct SolanaClient {
    rpc_client: RpcClient,
    commitment: CommitmentConfig,
}

impl SolanaClient {
    pub fn new(config: &Config) -> Self {
        let rpc_url = &config.solana_rpc_url;
        let timeout = Duration::from_secs(config.rpc_timeout_secs);
        let commitment = parse_commitment(&config.solana_commitment_level);

        info!(
            "Initializing Solana client with RPC endpoint: {}, commitment: {:?}",
            endpoint_host(rpc_url),
            commitment
        );

        let rpc_client = RpcClient::new_with_timeout_and_commitment(
            rpc_url.clone(),
            timeout,
            commitment,
        );

        Self::with_rpc_client(rpc_client, commitment)
    }

    pub fn with_rpc_client(rpc_client: RpcClient, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_client,
            commitment,
        }
    }

    pub fn url(&self) -> String {
        self.rpc_client.url()
    }
}

impl TransactionProvider for SolanaClient {
    async fn recent_signatures(
        &self,
        address: &Address,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, MonitorError> {
        let signatures = self
            .rpc_client
            .get_signatures_for_address_with_config(
                address.pubkey(),
                GetConfirmedSignaturesForAddress2Config {
                    before: None,
                    until: None,
                    limit: Some(limit),
                    commitment: Some(self.commitment),
                },
            )
            .await
            .map_err(|e| classify(e, &address.to_string()))?;

        debug!("Listed {} signatures for {}", signatures.len(), address);
        Ok(signatures.iter().map(extract_signature).collect())
    }

    async fn transaction(&self, signature_str: &str) -> Result<Option<TransactionRecord>, MonitorError> {
        // Reject garbage before spending a request on it
        Signature::from_str(signature_str)
            .map_err(|_| MonitorError::Decode(format!("invalid signature: {}", signature_str)))?;

        let config = transaction_config(self.commitment);

        // `send` keeps a `null` result distinguishable from a decoding failure
        let tx: Option<EncodedConfirmedTransactionWithStatusMeta> = self
            .rpc_client
            .send(RpcRequest::GetTransaction, json!([signature_str, config]))
            .await
            .map_err(|e| classify(e, signature_str))?;

        match tx {
            Some(tx) => extract_record(signature_str, &tx).map(Some),
            None => {
                debug!("No transaction detail for {}", signature_str);
                Ok(None)
            }
        }
    }
}

/// `getTransaction` options: meta needs plain JSON and an explicit version ceiling.
fn transaction_config(commitment: CommitmentConfig) -> RpcTransactionConfig {
    RpcTransactionConfig {
        encoding: Some(UiTransactionEncoding::Json),
        commitment: Some(commitment),
        max_supported_transaction_version: Some(MAX_SUPPORTED_TRANSACTION_VERSION),
    }
}

fn parse_commitment(level: &str) -> CommitmentConfig {
    match level {
        "processed" => CommitmentConfig::processed(),
        "confirmed" => CommitmentConfig::confirmed(),
        "finalized" => CommitmentConfig::finalized(),
        _ => CommitmentConfig::confirmed(),
    }
}

/// Sort a client error into the monitor's error kinds.
fn classify(err: ClientError, subject: &str) -> MonitorError {
    match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. })
            if *code == TRANSACTION_HISTORY_NOT_AVAILABLE
                || *code == UNSUPPORTED_TRANSACTION_VERSION =>
        {
            MonitorError::NotFound(subject.to_string())
        }
        ClientErrorKind::SerdeJson(e) => MonitorError::Decode(e.to_string()),
        _ => MonitorError::Transport(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::Value;
    use solana_client::rpc_request::RpcResponseErrorData;
    use std::collections::HashMap;

    const SIGNATURE: &str =
        "3PZSPpiZ5TtBPhCoo4GNCpxqsZuMXR2nkG5j5AZspMxGMkZpQkFnBn7DA9M8S8VmmwDLSZqxVVHnHtdhk8yEpyk3";

    fn response_error(code: i64, message: &str) -> ClientError {
        ClientError::from(ClientErrorKind::RpcError(RpcError::RpcResponseError {
            code,
            message: message.to_string(),
            data: RpcResponseErrorData::Empty,
        }))
    }

    fn mock_client(mocks: HashMap<RpcRequest, Value>) -> SolanaClient {
        let rpc_client = RpcClient::new_mock_with_mocks("succeeds".to_string(), mocks);
        SolanaClient::with_rpc_client(rpc_client, CommitmentConfig::confirmed())
    }

    #[test]
    fn unavailable_history_is_not_found() {
        let err = classify(
            response_error(TRANSACTION_HISTORY_NOT_AVAILABLE, "Transaction history is not available"),
            SIGNATURE,
        );
        assert!(matches!(&err, MonitorError::NotFound(sig) if sig == SIGNATURE));
    }

    #[test]
    fn unsupported_version_is_not_found() {
        let err = classify(
            response_error(UNSUPPORTED_TRANSACTION_VERSION, "Transaction version (1) is not supported"),
            SIGNATURE,
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn other_server_errors_are_transport() {
        let err = classify(response_error(-32005, "Node is behind"), SIGNATURE);
        assert_eq!(err.kind(), ErrorKind::Transport);

        let err = classify(
            ClientError::from(ClientErrorKind::Custom("connection refused".to_string())),
            SIGNATURE,
        );
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn unparsable_responses_are_decode_errors() {
        let serde_err = serde_json::from_str::<u64>("\"not a number\"").unwrap_err();
        let err = classify(ClientError::from(ClientErrorKind::SerdeJson(serde_err)), SIGNATURE);
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn transaction_request_asks_for_versioned_json() {
        let config = serde_json::to_value(transaction_config(CommitmentConfig::confirmed())).unwrap();
        assert_eq!(config["maxSupportedTransactionVersion"], 0);
        assert_eq!(config["encoding"], "json");
        assert_eq!(config["commitment"], "confirmed");
    }

    #[tokio::test]
    async fn null_transaction_is_none() {
        let mut mocks = HashMap::new();
        mocks.insert(RpcRequest::GetTransaction, Value::Null);
        let client = mock_client(mocks);

        let result = client.transaction(SIGNATURE).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn malformed_signature_is_rejected_before_the_request() {
        let client = mock_client(HashMap::new());

        let result = client.transaction("not-a-signature").await;

        assert!(matches!(result, Err(MonitorError::Decode(_))));
    }

    #[test]
    fn unknown_commitment_falls_back_to_confirmed() {
        assert_eq!(parse_commitment("finalized"), CommitmentConfig::finalized());
        assert_eq!(parse_commitment("bogus"), CommitmentConfig::confirmed());
    }

    #[test]
    fn client_uses_configured_endpoint() {
        let config = Config {
            solana_rpc_url: "http://127.0.0.1:8899".to_string(),
            ..Config::default()
        };
        let client = SolanaClient::new(&config);
        assert_eq!(client.url(), "http://127.0.0.1:8899");
    }
}
