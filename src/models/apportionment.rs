use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::daily_hours::DailyHours;

/// Hours attributed to one contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractHours {
    pub percentage: f64,
    pub hours: f64,
}

/// Monthly total split across the user's contracts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyApportionment {
    pub year: i32,
    pub month: u32,
    pub total_hours: f64,
    pub contracts: BTreeMap<String, ContractHours>,
    /// Worked days inside the month, ascending.
    pub days: Vec<(NaiveDate, f64)>,
}

impl MonthlyApportionment {
    /// A zero total is rendered as "no data" even though the map is filled.
    pub fn has_data(&self) -> bool {
        self.total_hours != 0.0
    }

    pub fn apportioned_total(&self) -> f64 {
        self.contracts.values().map(|c| c.hours).sum()
    }
}

/// Week report: per-day breakdown since `week_start`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyHours {
    pub week_start: NaiveDate,
    pub days: Vec<(NaiveDate, DailyHours)>,
    pub total_hours: f64,
}
