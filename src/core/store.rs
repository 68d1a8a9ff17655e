//! In-memory, append-only store of punch events.
//!
//! One store is created per session and handed by reference to every
//! operation that reads or appends punches.

use crate::errors::{AppError, AppResult};
use crate::models::event::PunchEvent;
use crate::models::event_kind::EventKind;
use chrono::{Local, NaiveDate, NaiveTime};

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<PunchEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a punch for `user` at the given date and time.
    ///
    /// Ids are `count + 1`; duplicates of the same kind are stored as
    /// separate events.
    pub fn append(
        &mut self,
        user: &str,
        kind: EventKind,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<PunchEvent> {
        let user = user.trim();
        if user.is_empty() {
            return Err(AppError::EmptyUsername);
        }

        let id = self.events.len() as u64 + 1;
        let ev = PunchEvent::new(id, user, kind, date, time);
        self.events.push(ev.clone());
        Ok(ev)
    }

    /// Append a punch stamped with the current local date and time.
    pub fn punch_now(&mut self, user: &str, kind: EventKind) -> AppResult<PunchEvent> {
        let now = Local::now().naive_local();
        let time = crate::utils::time::truncate_seconds(now.time());
        self.append(user, kind, now.date(), time)
    }

    /// Events of `user`, optionally restricted to one date, in insertion order.
    ///
    /// Usernames are matched trimmed, as `append` stores them.
    pub fn query(&self, user: &str, date: Option<NaiveDate>) -> Vec<PunchEvent> {
        let user = user.trim();
        self.events
            .iter()
            .filter(|e| e.user == user)
            .filter(|e| date.is_none_or(|d| e.date == d))
            .cloned()
            .collect()
    }

    /// Events of `user` with `from <= date < to`, in insertion order.
    pub fn query_range(&self, user: &str, from: NaiveDate, to: NaiveDate) -> Vec<PunchEvent> {
        let user = user.trim();
        self.events
            .iter()
            .filter(|e| e.user == user && e.date >= from && e.date < to)
            .cloned()
            .collect()
    }

    /// Distinct dates with at least one punch for `user`, ascending.
    pub fn dates_for(&self, user: &str) -> Vec<NaiveDate> {
        let user = user.trim();
        let mut dates: Vec<NaiveDate> = self
            .events
            .iter()
            .filter(|e| e.user == user)
            .map(|e| e.date)
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
