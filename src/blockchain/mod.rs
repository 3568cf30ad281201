pub mod client;
pub mod models;
pub mod polling;
pub mod provider;

// Re-exports for convenience
pub use client::SolanaClient;
pub use polling::{CycleReport, PollDriver, PollSettings, PollState};
pub use provider::TransactionProvider;
