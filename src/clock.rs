//! Timestamps and generated identifiers.

use chrono::{SecondsFormat, TimeDelta, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-01-15T08:30:00.000Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// ISO-8601 timestamp `days` from now (negative for the past), or `None`
/// when the result falls outside the representable date range.
pub fn days_from_now(days: i64) -> Option<String> {
    let delta = TimeDelta::try_days(days)?;
    Utc::now()
        .checked_add_signed(delta)
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// `<prefix>_<unix millis>_<9 base-36 chars>`, e.g. `txn_1705307400000_k3j9x0a1b`.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}
