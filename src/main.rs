// Load configuration (environment, then command-line flags)
// Set up logging
// Validate the monitored address
// Create the RPC client and console presenter
// Poll until Ctrl+C

use solana_tx_monitor::{
    cli::Args,
    config::{endpoint_host, Config},
    Address, MonitorError, PollDriver, PollSettings, Presenter, SolanaClient,
};

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; the console itself belongs to the presenter
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    args.apply(&mut config);
    info!("Configuration loaded: {:?}", config);

    let mut presenter = Presenter::new(io::stdout());

    let address = match Address::parse(&config.address) {
        Ok(address) => address,
        Err(e) => {
            let err = MonitorError::from(e);
            error!("Refusing to start: {}", err);
            presenter.fatal(&err);
            return ExitCode::FAILURE;
        }
    };

    let client = SolanaClient::new(&config);
    presenter.banner(&address, &endpoint_host(&client.url()));

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received");
                signal.cancel();
            }
            Err(e) => error!("Unable to listen for Ctrl+C: {}", e),
        }
    });

    let mut driver = PollDriver::new(client, presenter, address, PollSettings::from(&config));
    driver.run(&shutdown).await;

    ExitCode::SUCCESS
}
