// Runtime configuration for the monitor:
// - target address
// - RPC endpoint URL and request timeout
// - poll interval and per-cycle signature cap
// Values come from the environment (or a .env file) and can be overridden on the command line.

use dotenv::dotenv;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ADDRESS: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Clone)]
pub struct Config {
    pub address: String,
    pub solana_rpc_url: String,
    pub poll_interval: Duration,
    pub signature_limit: usize,
    pub solana_commitment_level: String,
    pub rpc_timeout_secs: u64,
    /// Stop after this many poll cycles. `None` polls until interrupted.
    pub max_cycles: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            solana_rpc_url: DEFAULT_RPC_URL.to_string(),
            poll_interval: Duration::from_secs(5),
            signature_limit: 5,
            solana_commitment_level: "confirmed".to_string(),
            rpc_timeout_secs: 30,
            max_cycles: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let address = env::var("MONITOR_ADDRESS").unwrap_or(defaults.address);
        let solana_rpc_url = env::var("SOLANA_RPC_URL").unwrap_or(defaults.solana_rpc_url);
        let poll_interval = positive(env::var("POLL_INTERVAL_SECS").ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.poll_interval);
        let signature_limit =
            positive(env::var("SIGNATURE_LIMIT").ok()).unwrap_or(defaults.signature_limit);
        let solana_commitment_level = env::var("SOLANA_COMMITMENT_LEVEL")
            .unwrap_or(defaults.solana_commitment_level);
        let rpc_timeout_secs =
            positive(env::var("RPC_TIMEOUT_SECS").ok()).unwrap_or(defaults.rpc_timeout_secs);

        Self {
            address,
            solana_rpc_url,
            poll_interval,
            signature_limit,
            solana_commitment_level,
            rpc_timeout_secs,
            max_cycles: None,
        }
    }
}

// The endpoint URL can carry an API key, so only its host is ever shown.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.address)
            .field("solana_rpc_url", &endpoint_host(&self.solana_rpc_url))
            .field("poll_interval", &self.poll_interval)
            .field("signature_limit", &self.signature_limit)
            .field("solana_commitment_level", &self.solana_commitment_level)
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .field("max_cycles", &self.max_cycles)
            .finish()
    }
}

/// Host (and explicit port) of an endpoint URL, without path, query or credentials.
pub fn endpoint_host(rpc_url: &str) -> String {
    match Url::parse(rpc_url) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => "<no host>".to_string(),
        },
        Err(_) => "<invalid url>".to_string(),
    }
}

/// Parse a numeric setting, ignoring values that are malformed or not above zero.
fn positive<T: FromStr + PartialOrd + Default>(value: Option<String>) -> Option<T> {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|n| *n > T::default())
}
