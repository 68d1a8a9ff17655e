//! Horizontal bar chart of hours per label.

use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Render one bar per `(label, hours)`, scaled so the largest value spans
/// `width` cells. Negative values are drawn in red from zero.
pub fn bar_chart(rows: &[(String, f64)], width: usize, decimals: usize) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let max = rows
        .iter()
        .map(|(_, h)| h.abs())
        .fold(0.0_f64, f64::max);
    let label_w = rows
        .iter()
        .map(|(l, _)| UnicodeWidthStr::width(strip_ansi(l).as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, hours) in rows {
        let len = if max > 0.0 {
            ((hours.abs() / max) * width as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(len);
        let painted = if *hours < 0.0 {
            Colour::Red.paint(bar).to_string()
        } else {
            Colour::Green.paint(bar).to_string()
        };
        let pad = " ".repeat(label_w.saturating_sub(UnicodeWidthStr::width(strip_ansi(label).as_str())));

        out.push_str(&format!(
            "{label}{pad} │{painted} {hours:.prec$}h\n",
            prec = decimals
        ));
    }

    out
}
