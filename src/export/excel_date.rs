// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_FORMAT: &str = "hh:mm:ss";

/// Interpret a cell string as a date or a time-of-day, returning the Excel
/// number format and serial value.
pub(crate) fn parse_to_excel_serial(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date_serial(d).map(|v| (DATE_FORMAT, v));
    }

    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .ok()
        .map(|t| (TIME_FORMAT, time_serial(t)))
}

/// Excel serial day number (1900 date system, epoch 1899-12-30).
pub(crate) fn date_serial(d: NaiveDate) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}

/// Fraction of the day represented by a time-of-day.
pub(crate) fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
