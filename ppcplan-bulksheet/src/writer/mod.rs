//! Serializing a [`Document`](crate::Document) to files.

mod delimited;
mod xlsx;

pub use delimited::{sheet_to_csv, write_csv_dir};
pub use xlsx::{write_xlsx, xlsx_bytes};

use ppcplan_types::StartDate;

/// `<brand>_bulksheet_<YYYYMMDD>.xlsx`, with anything but ASCII letters and
/// digits in the brand replaced by `_`.
pub fn default_file_name(brand: &str, start_date: StartDate) -> String {
    let brand: String = brand
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if brand.is_empty() {
        format!("bulksheet_{start_date}.xlsx")
    } else {
        format!("{brand}_bulksheet_{start_date}.xlsx")
    }
}
