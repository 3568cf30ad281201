use chrono::{DateTime, Local};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Characters of a signature shown in headers and messages.
pub const SIGNATURE_PREFIX_LEN: usize = 20;

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Exact SOL rendering with nine decimals, e.g. `5000` -> `0.000005000`.
pub fn format_sol(lamports: u64) -> String {
    format!("{}.{:09}", lamports / LAMPORTS_PER_SOL, lamports % LAMPORTS_PER_SOL)
}

/// Signed SOL rendering, always carrying a sign, e.g. `-5000` -> `-0.000005000`.
pub fn format_sol_delta(lamports: i128) -> String {
    let sign = if lamports < 0 { '-' } else { '+' };
    let magnitude = lamports.unsigned_abs();
    let per_sol = LAMPORTS_PER_SOL as u128;
    format!("{}{}.{:09}", sign, magnitude / per_sol, magnitude % per_sol)
}

pub fn truncate_signature(signature: &str) -> &str {
    match signature.char_indices().nth(SIGNATURE_PREFIX_LEN) {
        Some((idx, _)) => &signature[..idx],
        None => signature,
    }
}

pub fn format_timestamp(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
}
