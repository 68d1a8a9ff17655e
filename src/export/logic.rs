// src/export/logic.rs

use crate::core::calculator::daily::daily_hours;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EventExport, ExportRows, SummaryExport};
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportSheet};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Options of one export run.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub sheet: ExportSheet,
    pub file: &'a str,
    pub range: Option<&'a str>,
    pub force: bool,
    pub decimals: usize,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export of one user's punches or daily summary.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `start:end` intervals of the same shape
    ///
    /// Returns the number of data rows written.
    pub fn export(store: &EventStore, user: &str, req: &ExportRequest<'_>) -> AppResult<usize> {
        let path = Path::new(req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                req.file
            )));
        }

        let bounds = match req.range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => {
                let (start, last) = parse_range(r)?;
                let end = last
                    .succ_opt()
                    .ok_or_else(|| AppError::InvalidRange(r.to_string()))?;
                Some((start, end))
            }
        };

        ensure_writable(path, req.force)?;

        let rows = Self::collect_rows(store, user, req.sheet, bounds, req.decimals);

        if rows.is_empty() {
            warning("No events found for selected range: writing header only.");
        }

        match req.format {
            ExportFormat::Csv => export_csv(&rows, path, req.decimals)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, req.sheet, path, req.decimals)?,
        }

        Ok(rows.len())
    }

    /// Build the rows of the requested sheet within half-open `bounds`
    /// (`start <= date < end`).
    pub fn collect_rows(
        store: &EventStore,
        user: &str,
        sheet: ExportSheet,
        bounds: Option<(NaiveDate, NaiveDate)>,
        decimals: usize,
    ) -> ExportRows {
        let events = match bounds {
            Some((start, end)) => store.query_range(user, start, end),
            None => store.query(user, None),
        };

        match sheet {
            ExportSheet::Events => ExportRows::Events(events.iter().map(EventExport::from).collect()),
            ExportSheet::Summary => {
                let mut dates: Vec<NaiveDate> = events.iter().map(|e| e.date).collect();
                dates.sort();
                dates.dedup();

                ExportRows::Summary(
                    dates
                        .into_iter()
                        .map(|d| SummaryExport::from_day(d, &daily_hours(store, user, d), decimals))
                        .collect(),
                )
            }
        }
    }
}
