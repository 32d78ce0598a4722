use crate::document::{Document, Row, Sheet};
use crate::{BulksheetError, BulksheetResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes one `<tab name>.csv` per sheet into `dir`, creating it if needed.
/// Returns the written paths in document order.
pub fn write_csv_dir(document: &Document, dir: &Path) -> BulksheetResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(document.len());
    for sheet in document.sheets() {
        let path = dir.join(format!("{}.csv", sheet.name()));
        let mut writer = csv::Writer::from_path(&path)?;
        for row in sheet.rows() {
            writer.write_record(record(row))?;
        }
        writer.flush()?;
        debug!("Wrote {} rows to {:?}", sheet.row_count(), path);
        paths.push(path);
    }
    Ok(paths)
}

/// Renders one sheet as CSV text. Empty cells become empty fields.
pub fn sheet_to_csv(sheet: &Sheet) -> BulksheetResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in sheet.rows() {
        writer.write_record(record(row))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| BulksheetError::Io(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn record(row: &Row) -> Vec<String> {
    row.iter()
        .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect()
}
