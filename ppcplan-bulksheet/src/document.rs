//! In-memory bulk document: cells, rows, sheets.

use crate::headers::SheetKind;
use std::fmt;

/// A single non-empty cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    /// Returns the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric content, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One row, positionally aligned with its sheet's header list. `None` is an
/// empty cell.
pub type Row = Vec<Option<Cell>>;

/// One sheet: the header row followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    kind: SheetKind,
    rows: Vec<Row>,
}

impl Sheet {
    /// Creates a sheet holding only its header row.
    pub fn new(kind: SheetKind) -> Self {
        let header = kind
            .headers()
            .iter()
            .map(|h| Some(Cell::from(*h)))
            .collect();
        Self {
            kind,
            rows: vec![header],
        }
    }

    pub fn kind(&self) -> SheetKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.tab_name()
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.headers()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[1..]
    }

    /// Row count including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the sheet holds anything beyond the header.
    pub fn has_data(&self) -> bool {
        self.rows.len() > 1
    }

    /// Position of a header in this sheet's schema.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers().iter().position(|h| *h == header)
    }

    /// Cell at (`row`, `header`). Row 0 is the header row.
    pub fn cell(&self, row: usize, header: &str) -> Option<&Cell> {
        let col = self.column(header)?;
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Text of the cell at (`row`, `header`).
    pub fn text(&self, row: usize, header: &str) -> Option<&str> {
        self.cell(row, header).and_then(Cell::as_text)
    }

    /// Number in the cell at (`row`, `header`).
    pub fn number(&self, row: usize, header: &str) -> Option<f64> {
        self.cell(row, header).and_then(Cell::as_number)
    }
}

/// A bulk-upload document: named sheets in fixed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a sheet as the next tab.
    pub fn append_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn sheet_names(&self) -> Vec<&'static str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Data rows across all sheets, headers excluded.
    pub fn data_row_count(&self) -> usize {
        self.sheets.iter().map(|s| s.data_rows().len()).sum()
    }
}
