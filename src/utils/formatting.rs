//! Formatting utilities used for session and export outputs.

use regex::Regex;
use std::sync::OnceLock;

/// Remove ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Round hours to `decimals` places for display and export.
pub fn round_hours(hours: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (hours * factor).round() / factor
}

/// Decimal hours as `HHh MMm`, signed when negative.
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
