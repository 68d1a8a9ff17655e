//! Daily hours: fold of one user's punches for one date.

use crate::core::store::EventStore;
use crate::models::daily_hours::DailyHours;
use crate::models::event::PunchEvent;
use crate::models::event_kind::EventKind;
use chrono::{NaiveDate, NaiveTime};

/// Derive the daily view for (user, date) from the store.
pub fn daily_hours(store: &EventStore, user: &str, date: NaiveDate) -> DailyHours {
    fold_events(&store.query(user, Some(date)))
}

/// Fold punches in insertion order: the last event of each singular kind
/// wins, extras are appended.
pub fn fold_events(events: &[PunchEvent]) -> DailyHours {
    let mut day = events.iter().fold(DailyHours::default(), |mut acc, ev| {
        match ev.kind {
            EventKind::Entry => acc.entry = Some(ev.time),
            EventKind::LunchOut => acc.lunch_out = Some(ev.time),
            EventKind::LunchIn => acc.lunch_in = Some(ev.time),
            EventKind::Exit => acc.exit = Some(ev.time),
            kind @ EventKind::Extra(_) => acc.extras.push((kind, ev.time)),
        }
        acc
    });

    day.lunch_hours = lunch_hours(day.lunch_out, day.lunch_in);
    day.total_hours = match (day.entry, day.exit) {
        (Some(entry), Some(exit)) => hours_between(entry, exit) - day.lunch_hours,
        _ => 0.0,
    };

    day
}

/// Lunch break length; an inverted pair counts as no break.
fn lunch_hours(out: Option<NaiveTime>, back: Option<NaiveTime>) -> f64 {
    match (out, back) {
        (Some(o), Some(i)) => hours_between(o, i).max(0.0),
        _ => 0.0,
    }
}

/// Wall-clock difference on the same calendar day, in hours.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}
