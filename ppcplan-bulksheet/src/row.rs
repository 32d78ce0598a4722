//! Sparse field maps and their projection onto a sheet schema.

use crate::document::{Cell, Row};
use crate::headers::{self, SheetKind};
use std::collections::HashMap;

const OPERATION_CREATE: &str = "Create";
const STATE_ENABLED: &str = "enabled";

/// The fields set on one row, keyed by header name.
///
/// Headers not present here become empty cells when the row is built.
#[derive(Debug, Clone, Default)]
pub struct RowFields {
    fields: HashMap<&'static str, Cell>,
}

impl RowFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a data row for `entity` with the cells every exported row
    /// carries: product, entity, `Create` operation and `enabled` state.
    pub fn entity(kind: SheetKind, entity: &str) -> Self {
        Self::new()
            .text(headers::PRODUCT, kind.tab_name())
            .text(headers::ENTITY, entity)
            .text(headers::OPERATION, OPERATION_CREATE)
            .text(headers::STATE, STATE_ENABLED)
    }

    pub fn text(mut self, header: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(header, Cell::Text(value.into()));
        self
    }

    pub fn number(mut self, header: &'static str, value: f64) -> Self {
        self.fields.insert(header, Cell::Number(value));
        self
    }

    /// Sets the cell only when a value is present.
    pub fn opt_text(self, header: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(header, v),
            None => self,
        }
    }

    /// Sets the cell only when a value is present.
    pub fn opt_number(self, header: &'static str, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.number(header, v),
            None => self,
        }
    }

    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.fields.get(header)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Projects onto `headers`. See [`build_row`].
    pub fn build(&self, headers: &[&str]) -> Row {
        build_row(self, headers)
    }
}

/// Emits one cell per header, in header order: the field's value if set,
/// otherwise `None`. Fields whose name is not in `headers` are dropped.
pub fn build_row(fields: &RowFields, headers: &[&str]) -> Row {
    headers.iter().map(|h| fields.get(h).cloned()).collect()
}
