//! Entry points used by the session shell: punch, query and derived hours.

use crate::core::auth::UserDirectory;
use crate::core::calculator::{daily, monthly, weekly};
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::models::account::UserAccount;
use crate::models::apportionment::{MonthlyApportionment, WeeklyHours};
use crate::models::daily_hours::DailyHours;
use crate::models::event::PunchEvent;
use crate::models::event_kind::EventKind;
use chrono::{NaiveDate, NaiveTime};

pub struct Core;

impl Core {
    /// Append a punch; `None` date/time fields default to "now".
    pub fn append_event(
        store: &mut EventStore,
        user: &str,
        kind: EventKind,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
    ) -> AppResult<PunchEvent> {
        match (date, time) {
            (None, None) => store.punch_now(user, kind),
            _ => {
                let now = chrono::Local::now().naive_local();
                let time = time.unwrap_or_else(|| crate::utils::time::truncate_seconds(now.time()));
                store.append(user, kind, date.unwrap_or(now.date()), time)
            }
        }
    }

    pub fn query_events(store: &EventStore, user: &str, date: Option<NaiveDate>) -> Vec<PunchEvent> {
        store.query(user, date)
    }

    pub fn daily_hours(store: &EventStore, user: &str, date: NaiveDate) -> DailyHours {
        daily::daily_hours(store, user, date)
    }

    pub fn weekly_hours(store: &EventStore, user: &str, week_start: NaiveDate) -> f64 {
        weekly::weekly_hours(store, user, week_start)
    }

    pub fn weekly_report(store: &EventStore, user: &str, week_start: NaiveDate) -> WeeklyHours {
        weekly::weekly_report(store, user, week_start)
    }

    pub fn monthly_apportionment(
        store: &EventStore,
        account: &UserAccount,
        month: u32,
        year: i32,
    ) -> AppResult<MonthlyApportionment> {
        monthly::monthly_apportionment(store, account, month, year)
    }

    pub fn authenticate(users: &UserDirectory, username: &str, password: &str) -> bool {
        users.authenticate(username, password)
    }

    pub fn user_info<'a>(users: &'a UserDirectory, username: &str) -> Option<&'a UserAccount> {
        users.user_info(username)
    }
}
