use crate::blockchain::provider::TransactionProvider;
use crate::config::Config;
use crate::display::Presenter;
use crate::error::ErrorKind;
use crate::validation::Address;
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Starting,
    Polling,
    Sleeping,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub interval: Duration,
    /// Signatures fetched per cycle, newest first.
    pub signature_limit: usize,
    pub max_cycles: Option<u64>,
}

impl From<&Config> for PollSettings {
    fn from(config: &Config) -> Self {
        Self {
            interval: config.poll_interval,
            signature_limit: config.signature_limit,
            max_cycles: config.max_cycles,
        }
    }
}

/// Outcome counts for a single poll cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub listed: usize,
    pub fetched: usize,
    pub displayed: usize,
    pub not_found: usize,
    pub failed: usize,
    pub list_failed: bool,
}

/// Drives list -> fetch -> render -> sleep for one address until cancelled.
pub struct PollDriver<P, W: Write> {
    provider: P,
    presenter: Presenter<W>,
    address: Address,
    settings: PollSettings,
    state: PollState,
    cycles: u64,
}

impl<P: TransactionProvider, W: Write> PollDriver<P, W> {
    pub fn new(provider: P, presenter: Presenter<W>, address: Address, settings: PollSettings) -> Self {
        Self {
            provider,
            presenter,
            address,
            settings,
            state: PollState::Starting,
            cycles: 0,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_presenter(self) -> Presenter<W> {
        self.presenter
    }

    /// Poll until `shutdown` fires or the configured cycle limit is reached.
    pub async fn run(&mut self, shutdown: &CancellationToken) {
        info!(
            "Starting transaction polling for {} every {:?}",
            self.address, self.settings.interval
        );

        loop {
            match self.state {
                PollState::Starting => self.transition(PollState::Polling),
                PollState::Polling => {
                    if shutdown.is_cancelled() {
                        self.transition(PollState::Stopped);
                        continue;
                    }

                    let report = self.poll_cycle(shutdown).await;
                    self.cycles += 1;
                    debug!("Cycle {} finished: {:?}", self.cycles, report);

                    let exhausted = self
                        .settings
                        .max_cycles
                        .is_some_and(|max| self.cycles >= max);
                    if exhausted {
                        info!("Reached cycle limit of {}", self.cycles);
                        self.transition(PollState::Stopped);
                    } else {
                        self.transition(PollState::Sleeping);
                    }
                }
                PollState::Sleeping => {
                    tokio::select! {
                        biased;
                        _ = shutdown.cancelled() => self.transition(PollState::Stopped),
                        _ = sleep(self.settings.interval) => {
                            self.presenter.updating();
                            self.transition(PollState::Polling);
                        }
                    }
                }
                PollState::Stopped => break,
            }
        }

        info!("Shutting down transaction polling after {} cycles", self.cycles);
        self.presenter.stopped();
    }

    /// One list -> fetch -> render pass. Errors are reported and never abort the cycle early,
    /// except a listing failure, which leaves nothing to fetch.
    pub async fn poll_cycle(&mut self, shutdown: &CancellationToken) -> CycleReport {
        let mut report = CycleReport::default();
        let limit = self.settings.signature_limit;

        let signatures = match self.provider.recent_signatures(&self.address, limit).await {
            Ok(signatures) => signatures,
            Err(e) => {
                error!("Failed to get signatures for {}: {}", self.address, e);
                self.presenter.list_error(&self.address, &e);
                report.list_failed = true;
                return report;
            }
        };

        report.listed = signatures.len();
        if signatures.is_empty() {
            debug!("No signatures for {}", self.address);
            self.presenter.no_transactions(&self.address);
            return report;
        }

        let batch = &signatures[..signatures.len().min(limit)];
        for info in batch {
            if shutdown.is_cancelled() {
                debug!("Cancelled mid-cycle, {} signatures left unfetched", batch.len() - report.fetched);
                break;
            }

            report.fetched += 1;
            match self.provider.transaction(&info.signature).await {
                Ok(Some(record)) => {
                    self.presenter.transaction(&record);
                    report.displayed += 1;
                }
                Ok(None) => {
                    warn!("Transaction {} not found", info.signature);
                    self.presenter.not_found(&info.signature);
                    report.not_found += 1;
                }
                Err(e) => match e.kind() {
                    ErrorKind::NotFound => {
                        warn!("Transaction {} not available: {}", info.signature, e);
                        self.presenter.not_found(&info.signature);
                        report.not_found += 1;
                    }
                    ErrorKind::Transport | ErrorKind::Decode | ErrorKind::Validation => {
                        error!("Failed to get transaction {}: {}", info.signature, e);
                        self.presenter.fetch_error(&info.signature, &e);
                        report.failed += 1;
                    }
                },
            }
        }

        report
    }

    fn transition(&mut self, next: PollState) {
        debug!("Poll state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
