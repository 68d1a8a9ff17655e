// src/export/model.rs

use crate::models::daily_hours::DailyHours;
use crate::models::event::PunchEvent;
use crate::utils::formatting::round_hours;
use chrono::NaiveDate;
use serde::Serialize;

pub(crate) const EVENT_HEADERS: [&str; 3] = ["date", "kind", "time"];
pub(crate) const SUMMARY_HEADERS: [&str; 4] = ["date", "entry", "exit", "total hours"];

/// Flat row of the events sheet.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub date: String,
    pub kind: String,
    pub time: String,
}

impl From<&PunchEvent> for EventExport {
    fn from(ev: &PunchEvent) -> Self {
        Self {
            date: ev.date_str(),
            kind: ev.kind.ek_as_str(),
            time: ev.time_str(),
        }
    }
}

/// Flat row of the summary sheet. Missing punches are empty strings.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub date: String,
    pub entry: String,
    pub exit: String,
    pub total_hours: f64,
}

impl SummaryExport {
    pub fn from_day(date: NaiveDate, day: &DailyHours, decimals: usize) -> Self {
        let fmt = |t: Option<chrono::NaiveTime>| {
            t.map(|t| t.format("%H:%M:%S").to_string()).unwrap_or_default()
        };
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            entry: fmt(day.entry),
            exit: fmt(day.exit),
            total_hours: round_hours(day.total_hours, decimals),
        }
    }
}

/// Rows ready to be written, with the header that matches them.
#[derive(Debug, Clone)]
pub enum ExportRows {
    Events(Vec<EventExport>),
    Summary(Vec<SummaryExport>),
}

impl ExportRows {
    pub(crate) fn headers(&self) -> &'static [&'static str] {
        match self {
            ExportRows::Events(_) => &EVENT_HEADERS,
            ExportRows::Summary(_) => &SUMMARY_HEADERS,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExportRows::Events(v) => v.len(),
            ExportRows::Summary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as strings (CSV).
    pub(crate) fn to_table(&self, decimals: usize) -> Vec<Vec<String>> {
        match self {
            ExportRows::Events(v) => v
                .iter()
                .map(|e| vec![e.date.clone(), e.kind.clone(), e.time.clone()])
                .collect(),
            ExportRows::Summary(v) => v
                .iter()
                .map(|s| {
                    vec![
                        s.date.clone(),
                        s.entry.clone(),
                        s.exit.clone(),
                        format!("{:.prec$}", s.total_hours, prec = decimals),
                    ]
                })
                .collect(),
        }
    }
}
