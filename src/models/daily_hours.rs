use super::event_kind::EventKind;
use chrono::NaiveTime;
use serde::Serialize;

/// Derived view of one user's punches for one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyHours {
    pub entry: Option<NaiveTime>,
    pub lunch_out: Option<NaiveTime>,
    pub lunch_in: Option<NaiveTime>,
    pub exit: Option<NaiveTime>,
    pub extras: Vec<(EventKind, NaiveTime)>,
    pub total_hours: f64,
    pub lunch_hours: f64,
}

/// Inconsistencies detected on a day; reported, never corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAnomaly {
    ExitBeforeEntry,
    LunchInBeforeLunchOut,
    MissingEntry,
    MissingExit,
}

impl DayAnomaly {
    pub fn describe(&self) -> &'static str {
        match self {
            DayAnomaly::ExitBeforeEntry => "exit punched before entry (negative total)",
            DayAnomaly::LunchInBeforeLunchOut => "lunch_in punched before lunch_out (lunch ignored)",
            DayAnomaly::MissingEntry => "exit without entry (day not counted)",
            DayAnomaly::MissingExit => "entry without exit (day not counted)",
        }
    }
}

impl DailyHours {
    /// True when no punch at all was found.
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
            && self.lunch_out.is_none()
            && self.lunch_in.is_none()
            && self.exit.is_none()
            && self.extras.is_empty()
    }

    pub fn anomalies(&self) -> Vec<DayAnomaly> {
        let mut out = Vec::new();

        match (self.entry, self.exit) {
            (Some(i), Some(o)) if o < i => out.push(DayAnomaly::ExitBeforeEntry),
            (None, Some(_)) => out.push(DayAnomaly::MissingEntry),
            (Some(_), None) => out.push(DayAnomaly::MissingExit),
            _ => {}
        }

        if let (Some(lo), Some(li)) = (self.lunch_out, self.lunch_in)
            && li < lo
        {
            out.push(DayAnomaly::LunchInBeforeLunchOut);
        }

        out
    }
}
