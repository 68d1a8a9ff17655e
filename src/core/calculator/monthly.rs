//! Monthly totals and contract apportionment.

use crate::core::calculator::daily::daily_hours;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::account::UserAccount;
use crate::models::apportionment::{ContractHours, MonthlyApportionment};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Half-open bounds `[first day of month, first day of next month)`.
pub fn month_bounds(month: u32, year: i32) -> AppResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(AppError::InvalidYear(year))?;
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(ny, nm, 1).ok_or(AppError::InvalidYear(year))?;
    Ok((start, end))
}

/// Sum daily totals over the month and split them by contract percentage.
pub fn monthly_apportionment(
    store: &EventStore,
    account: &UserAccount,
    month: u32,
    year: i32,
) -> AppResult<MonthlyApportionment> {
    let (start, end) = month_bounds(month, year)?;
    let user = account.username.as_str();

    let mut dates: Vec<NaiveDate> = store
        .query_range(user, start, end)
        .iter()
        .map(|e| e.date)
        .collect();
    dates.sort();
    dates.dedup();

    let days: Vec<(NaiveDate, f64)> = dates
        .into_iter()
        .map(|d| (d, daily_hours(store, user, d).total_hours))
        .collect();

    let total_hours: f64 = days.iter().map(|(_, h)| h).sum();

    Ok(MonthlyApportionment {
        year,
        month,
        total_hours,
        contracts: apportion(total_hours, &account.contract_shares),
        days,
    })
}

pub fn apportion(total_hours: f64, shares: &BTreeMap<String, f64>) -> BTreeMap<String, ContractHours> {
    shares
        .iter()
        .map(|(name, pct)| {
            (
                name.clone(),
                ContractHours {
                    percentage: *pct,
                    hours: total_hours * pct / 100.0,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event_kind::EventKind;
    use chrono::NaiveTime;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn maria(shares: &[(&str, f64)]) -> UserAccount {
        UserAccount {
            username: "maria".into(),
            password_digest: String::new(),
            display_name: "Maria".into(),
            role_title: "Analyst".into(),
            contract_shares: shares.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn standard_day(store: &mut EventStore, date: &str) {
        for (kind, time) in [
            (EventKind::Entry, "08:00:00"),
            (EventKind::LunchOut, "12:00:00"),
            (EventKind::LunchIn, "13:00:00"),
            (EventKind::Exit, "17:00:00"),
        ] {
            store.append("maria", kind, d(date), t(time)).unwrap();
        }
    }

    #[test]
    fn splits_month_by_contract_share() {
        let mut store = EventStore::new();
        standard_day(&mut store, "2024-03-01");

        let m = monthly_apportionment(&store, &maria(&[("A", 70.0), ("B", 30.0)]), 3, 2024).unwrap();

        assert_eq!(m.total_hours, 8.0);
        assert_eq!(m.contracts["A"].percentage, 70.0);
        assert!((m.contracts["A"].hours - 5.6).abs() < 1e-9);
        assert_eq!(m.contracts["B"].percentage, 30.0);
        assert!((m.contracts["B"].hours - 2.4).abs() < 1e-9);
        assert!((m.apportioned_total() - m.total_hours).abs() < 1e-9);
        assert!(m.has_data());
    }

    #[test]
    fn month_range_is_half_open() {
        let mut store = EventStore::new();
        standard_day(&mut store, "2024-02-29");
        standard_day(&mut store, "2024-03-31");
        standard_day(&mut store, "2024-04-01");

        let m = monthly_apportionment(&store, &maria(&[("A", 100.0)]), 3, 2024).unwrap();
        assert_eq!(m.total_hours, 8.0);
        assert_eq!(m.days, vec![(d("2024-03-31"), 8.0)]);
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(
            month_bounds(12, 2024).unwrap(),
            (d("2024-12-01"), d("2025-01-01"))
        );
        assert!(matches!(month_bounds(13, 2024), Err(AppError::InvalidMonth(13))));
        assert!(matches!(month_bounds(0, 2024), Err(AppError::InvalidMonth(0))));
    }

    #[test]
    fn out_of_range_year_names_the_year() {
        let err = month_bounds(3, 300_000).unwrap_err();
        assert!(matches!(err, AppError::InvalidYear(300_000)));
        assert!(err.to_string().contains("300000"));
    }

    #[test]
    fn empty_month_still_lists_contracts() {
        let store = EventStore::new();
        let m = monthly_apportionment(&store, &maria(&[("A", 70.0), ("B", 30.0)]), 3, 2024).unwrap();

        assert!(!m.has_data());
        assert_eq!(m.contracts.len(), 2);
        assert_eq!(m.contracts["A"].hours, 0.0);
    }

    #[test]
    fn incomplete_shares_apportion_partially() {
        let mut store = EventStore::new();
        standard_day(&mut store, "2024-03-01");

        let m = monthly_apportionment(&store, &maria(&[("A", 50.0), ("B", 25.0)]), 3, 2024).unwrap();
        assert!((m.apportioned_total() - 8.0 * 75.0 / 100.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_match() {
        let mut store = EventStore::new();
        standard_day(&mut store, "2024-03-01");
        let acc = maria(&[("A", 70.0), ("B", 30.0)]);

        assert_eq!(
            monthly_apportionment(&store, &acc, 3, 2024).unwrap(),
            monthly_apportionment(&store, &acc, 3, 2024).unwrap()
        );
    }
}
