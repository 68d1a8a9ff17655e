// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ExportRows;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (an empty selection is `[]`).
pub(crate) fn export_json(rows: &ExportRows, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = match rows {
        ExportRows::Events(v) => serde_json::to_string_pretty(v)?,
        ExportRows::Summary(v) => serde_json::to_string_pretty(v)?,
    };

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", rows.len(), path);
    Ok(())
}

/// Export CSV. The header row is always written, even with no data rows.
pub(crate) fn export_csv(rows: &ExportRows, path: &Path, decimals: usize) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(rows.headers())?;
    for record in rows.to_table(decimals) {
        wtr.write_record(&record)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
