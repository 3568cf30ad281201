pub mod blockchain;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use blockchain::{PollDriver, PollSettings, PollState, SolanaClient, TransactionProvider};
pub use display::Presenter;
pub use error::{ErrorKind, MonitorError};
pub use models::{SignatureInfo, TransactionRecord};
pub use validation::{validate_solana_address, Address, ValidationError};
