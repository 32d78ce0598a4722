use crate::BulksheetResult;
use crate::document::{Cell, Document};
use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};
use std::path::Path;
use tracing::debug;

/// Writes the document as an `.xlsx` workbook, one tab per sheet.
pub fn write_xlsx(document: &Document, path: &Path) -> BulksheetResult<()> {
    let mut workbook = build_workbook(document)?;
    workbook.save(path)?;
    debug!("Wrote {} sheets to {:?}", document.len(), path);
    Ok(())
}

/// The workbook bytes, for callers that handle the download themselves.
pub fn xlsx_bytes(document: &Document) -> BulksheetResult<Vec<u8>> {
    let mut workbook = build_workbook(document)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(document: &Document) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    for sheet in document.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (r, row) in sheet.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = position(r, c)?;
                match cell {
                    Some(Cell::Text(s)) => {
                        worksheet.write_string(r, c, s)?;
                    }
                    Some(Cell::Number(n)) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    None => {}
                }
            }
        }
    }

    Ok(workbook)
}

/// Converts an index pair to the workbook's row/column types.
fn position(row: usize, col: usize) -> Result<(RowNum, ColNum), XlsxError> {
    let row = RowNum::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)?;
    let col = ColNum::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
    Ok((row, col))
}
