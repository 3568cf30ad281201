use super::format::{format_sol, format_sol_delta, format_timestamp, truncate_signature};
use super::theme::{self, icons};
use crate::error::{ErrorKind, MonitorError};
use crate::models::TransactionRecord;
use crate::validation::Address;
use colored::*;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` out of range")]
    InvalidField(&'static str),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

const LABEL_WIDTH: usize = 22;

fn tint(s: &str, color: (u8, u8, u8)) -> ColoredString {
    s.truecolor(color.0, color.1, color.2)
}

/// A bordered block of `label  value` rows.
struct Panel {
    color: (u8, u8, u8),
    title: String,
    rows: Vec<(String, ColoredString)>,
}

impl Panel {
    fn new(color: (u8, u8, u8), title: String) -> Self {
        Self {
            color,
            title,
            rows: Vec::new(),
        }
    }

    fn row(&mut self, label: &str, value: ColoredString) {
        self.rows.push((label.to_string(), value));
    }

    fn paint(&self, s: &str) -> ColoredString {
        tint(s, self.color)
    }

    fn render(&self) -> String {
        // ColoredString derefs to the uncolored text, so widths ignore escape codes
        let inner = self
            .rows
            .iter()
            .map(|(_, value)| LABEL_WIDTH + value.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0);
        let rule = "─".repeat(inner + 2);

        let mut out = String::new();
        out.push_str(&format!("    {}\n", self.paint(&format!("┌{}┐", rule))));
        out.push_str(&format!(
            "    {} {}{} {}\n",
            self.paint("│"),
            self.paint(&self.title).bold(),
            " ".repeat(inner - self.title.chars().count()),
            self.paint("│")
        ));
        out.push_str(&format!("    {}\n", self.paint(&format!("├{}┤", rule))));
        for (label, value) in &self.rows {
            out.push_str(&format!(
                "    {} {}{}{} {}\n",
                self.paint("│"),
                tint(&format!("{:<width$}", label, width = LABEL_WIDTH), theme::CYAN),
                value,
                " ".repeat(inner - LABEL_WIDTH - value.chars().count()),
                self.paint("│")
            ));
        }
        out.push_str(&format!("    {}\n", self.paint(&format!("└{}┘", rule))));
        out
    }
}

/// Renders monitor output onto any writer (the terminal in production).
///
/// Output problems never escape: they are logged and the monitor keeps going.
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `endpoint` is shown as given, so pass a host rather than a full URL.
    pub fn banner(&mut self, address: &Address, endpoint: &str) {
        let text = format!(
            "{} {}\n    {} {}\n\n",
            icons::MONITOR,
            "Monitoring Solana transactions...".bright_green().bold(),
            tint(&address.to_string(), theme::ACCENT).bold(),
            format!("via {}", endpoint).bright_black(),
        );
        self.emit(&text);
    }

    pub fn updating(&mut self) {
        let text = format!("{}\n", "Updating...".bright_yellow().bold());
        self.emit(&text);
    }

    pub fn no_transactions(&mut self, address: &Address) {
        let text = format!(
            "    {} {}\n",
            tint(icons::WARNING, theme::WARNING),
            tint(&format!("No recent transactions for {}", address), theme::WARNING)
        );
        self.emit(&text);
    }

    /// Panel for one fetched transaction. Records that cannot be rendered are
    /// skipped with a warning instead.
    pub fn transaction(&mut self, record: &TransactionRecord) {
        let result = render_transaction(record).and_then(|text| {
            self.out.write_all(text.as_bytes())?;
            self.out.flush()?;
            Ok(())
        });

        match result {
            Ok(()) => debug!("Rendered transaction {}", record.signature),
            Err(RenderError::Io(e)) => warn!("Failed to write transaction {}: {}", record.signature, e),
            Err(e) => {
                warn!("Skipping transaction {}: {}", record.signature, e);
                self.skipped(&record.signature, &e);
            }
        }
    }

    pub fn not_found(&mut self, signature: &str) {
        let text = format!(
            "    {} {}\n",
            tint(icons::WARNING, theme::WARNING),
            tint(&format!("Transaction not found: {}...", truncate_signature(signature)), theme::WARNING)
        );
        self.emit(&text);
    }

    pub fn fetch_error(&mut self, signature: &str, err: &MonitorError) {
        let text = format!(
            "    {} {} {}\n",
            icons::ERROR.bright_red(),
            format!("Error fetching transaction {}...:", truncate_signature(signature)).bright_red(),
            err.to_string().red()
        );
        self.emit(&text);
    }

    pub fn list_error(&mut self, address: &Address, err: &MonitorError) {
        let hint = match err.kind() {
            ErrorKind::Transport | ErrorKind::Decode => "provider unavailable",
            ErrorKind::NotFound | ErrorKind::Validation => "request rejected",
        };
        let mut panel = Panel::new(theme::ERROR, format!("{} ERROR: {}", icons::ERROR, hint));
        panel.row("Address", format!("{}", address).bright_white());
        panel.row("Error", err.to_string().bright_red());
        let text = format!("\n{}\n", panel.render());
        self.emit(&text);
    }

    pub fn stopped(&mut self) {
        let text = format!(
            "{} {}\n",
            icons::STOP.bright_red(),
            "Monitoring stopped.".bright_red().bold()
        );
        self.emit(&text);
    }

    pub fn fatal(&mut self, err: &MonitorError) {
        let text = format!("{}\n", format!("An error occurred: {}", err).bright_red().bold());
        self.emit(&text);
    }

    fn skipped(&mut self, signature: &str, err: &RenderError) {
        let text = format!(
            "    {} {}\n",
            tint(icons::WARNING, theme::WARNING),
            tint(&format!("Skipping transaction {}...: {}", truncate_signature(signature), err), theme::WARNING)
        );
        self.emit(&text);
    }

    fn emit(&mut self, text: &str) {
        let result = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write to console: {}", e);
        }
    }
}

fn render_transaction(record: &TransactionRecord) -> Result<String, RenderError> {
    let block_time = record.block_time.ok_or(RenderError::MissingField("blockTime"))?;
    let timestamp = format_timestamp(block_time).ok_or(RenderError::InvalidField("blockTime"))?;

    let (status, color) = match &record.error {
        None => ("Success".bright_green(), theme::SUCCESS),
        Some(err) => (format!("Failed ({})", err).bright_red(), theme::ERROR),
    };

    let mut panel = Panel::new(
        color,
        format!(
            "{} Transaction: {}...",
            icons::TRANSACTION,
            truncate_signature(&record.signature)
        ),
    );
    panel.row("Timestamp", timestamp.bright_white());
    panel.row("Slot", record.slot.to_string().bright_white());
    panel.row("Status", status);
    panel.row("Fee (SOL)", format_sol(record.fee).bright_yellow());
    if let Some(change) = record.primary_balance_change() {
        let delta = format_sol_delta(change);
        let delta = if change < 0 { delta.bright_red() } else { delta.bright_green() };
        panel.row("Balance Change (SOL)", delta);
    }

    Ok(format!("{}\n", panel.render()))
}
