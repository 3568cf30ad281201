use crate::validation::ValidationError;
use solana_client::client_error::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("RPC error: {0}")]
    Transport(#[from] ClientError),

    #[error("Transaction not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Coarse classification used by the poll loop to pick a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    NotFound,
    Decode,
}

impl MonitorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MonitorError::Validation(_) => ErrorKind::Validation,
            MonitorError::Transport(_) => ErrorKind::Transport,
            MonitorError::NotFound(_) => ErrorKind::NotFound,
            MonitorError::Decode(_) => ErrorKind::Decode,
        }
    }
}
