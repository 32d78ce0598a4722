//! Bulksheets 2.0 document generator for PPC Plan.
//!
//! Turns a [`Workspace`](ppcplan_types::Workspace) into a [`Document`] with up
//! to three tabs, one per ad product:
//! - [`generators::sponsored_products`]: campaigns, placement adjustments, ad
//!   groups, keyword / product / auto targeting, product ads
//! - [`generators::sponsored_brands`]: campaigns with their creative and
//!   campaign-scoped keywords
//! - [`generators::sponsored_display`]: campaigns with tactic, ad groups,
//!   audience or product targeting, product ads
//!
//! [`BulksheetExporter`] assembles the tabs; the [`writer`] module turns the
//! result into `.xlsx` or CSV files. Generation itself never fails: unknown
//! codes fall back to defaults and missing data yields fewer rows.

mod assembler;
mod config;
mod document;
mod error;
pub mod generators;
pub mod headers;
pub mod mappers;
pub mod resolve;
mod row;
mod targeting;
pub mod writer;

pub use assembler::BulksheetExporter;
pub use config::BulksheetConfig;
pub use document::{Cell, Document, Row, Sheet};
pub use error::{BulksheetError, BulksheetResult};
pub use headers::SheetKind;
pub use row::{RowFields, build_row};
pub use targeting::Targeting;
