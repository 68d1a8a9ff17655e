use super::event_kind::EventKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A single time-clock punch. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PunchEvent {
    pub id: u64,
    pub user: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub timestamp: NaiveDateTime,
}

impl PunchEvent {
    pub fn new(id: u64, user: &str, kind: EventKind, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id,
            user: user.to_string(),
            kind,
            date,
            time,
            timestamp: date.and_time(time),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    pub fn get_date_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
