use solana_tx_monitor::{
    config::Config, display::truncate_signature, Address, Presenter, SolanaClient,
    TransactionProvider,
};
use std::io;
use std::time::Duration;
use tracing::{error, info, warn, Level};

/// Live check against the configured RPC endpoint: list, fetch and render once.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    info!("Starting RPC smoke test...");

    // 1. Setup
    let config = Config::from_env();
    let address = Address::parse(&config.address)?;
    let client = SolanaClient::new(&config);
    let mut presenter = Presenter::new(io::stdout());

    // 2. Test signature listing
    info!("Testing address signature retrieval for {}...", address);
    let signatures = client
        .recent_signatures(&address, config.signature_limit)
        .await?;

    if signatures.is_empty() {
        warn!("No signatures found for address {}", address);
        presenter.no_transactions(&address);
        return Ok(());
    }

    info!("✅ Retrieved {} signatures", signatures.len());
    for sig in &signatures {
        info!("   Signature: {} (slot {})", sig.signature, sig.slot);
    }

    // 3. Test transaction retrieval and rendering
    info!("Testing transaction retrieval...");
    let mut rendered = 0;
    for sig in signatures.iter().take(config.signature_limit) {
        match client.transaction(&sig.signature).await {
            Ok(Some(record)) => {
                presenter.transaction(&record);
                rendered += 1;
            }
            Ok(None) => {
                warn!("❌ No detail for {}", truncate_signature(&sig.signature));
                presenter.not_found(&sig.signature);
            }
            Err(e) => {
                error!("❌ Failed to get transaction {}: {}", sig.signature, e);
                presenter.fetch_error(&sig.signature, &e);
            }
        }

        // Small delay between requests
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    info!("✅ Rendered {} transactions", rendered);
    info!("RPC smoke test completed!");

    Ok(())
}
