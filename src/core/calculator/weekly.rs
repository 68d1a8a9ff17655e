//! Weekly aggregation since the most recent Monday.

use crate::core::calculator::daily::daily_hours;
use crate::core::store::EventStore;
use crate::models::apportionment::WeeklyHours;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_monday() as i64)
}

/// Per-day breakdown for every punched date `>= week_start`.
pub fn weekly_report(store: &EventStore, user: &str, week_start: NaiveDate) -> WeeklyHours {
    let days: Vec<_> = store
        .dates_for(user)
        .into_iter()
        .filter(|d| *d >= week_start)
        .map(|d| (d, daily_hours(store, user, d)))
        .collect();

    let total_hours = days.iter().map(|(_, day)| day.total_hours).sum();

    WeeklyHours {
        week_start,
        days,
        total_hours,
    }
}

pub fn weekly_hours(store: &EventStore, user: &str, week_start: NaiveDate) -> f64 {
    weekly_report(store, user, week_start).total_hours
}
