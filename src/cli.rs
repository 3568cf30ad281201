use crate::config::Config;
use clap::Parser;
use std::time::Duration;

/// Poll a Solana address for recent transactions and print them as they appear.
#[derive(Parser, Debug, Default)]
#[command(name = "solana-tx-monitor", version, long_about = None)]
pub struct Args {
    /// Address to monitor (overrides MONITOR_ADDRESS)
    #[arg(short, long)]
    pub address: Option<String>,

    /// JSON-RPC endpoint (overrides SOLANA_RPC_URL)
    #[arg(short, long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Seconds to wait between poll cycles
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Signatures fetched per cycle
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// RPC request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Commitment level: processed, confirmed or finalized
    #[arg(long)]
    pub commitment: Option<String>,

    /// Stop after this many poll cycles
    #[arg(long)]
    pub cycles: Option<u64>,
}

impl Args {
    /// Layer command-line values over the environment configuration.
    pub fn apply(self, config: &mut Config) {
        if let Some(address) = self.address {
            config.address = address;
        }
        if let Some(url) = self.rpc_url {
            config.solana_rpc_url = url;
        }
        if let Some(secs) = self.interval {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(limit) = self.limit {
            config.signature_limit = limit as usize;
        }
        if let Some(secs) = self.timeout {
            config.rpc_timeout_secs = secs;
        }
        if let Some(level) = self.commitment {
            config.solana_commitment_level = level;
        }
        if self.cycles.is_some() {
            config.max_cycles = self.cycles;
        }
    }
}
