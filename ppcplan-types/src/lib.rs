//! Advertising plan data model for PPC Plan.
//!
//! This crate defines the read-only object graph that the bulksheet exporter
//! walks:
//! - [`Workspace`]: the plan root (brand, campaigns, ad groups)
//! - [`Campaign`] with its [`CampaignKind`] (SP/SB/SD) and [`CampaignMatch`]
//! - [`AdGroup`], [`Keyword`] and [`Product`]
//! - [`StartDate`]: the export date rendered as `YYYYMMDD`
//!
//! The surrounding application owns these values; nothing here mutates a plan
//! after it has been loaded.

mod date;
mod kinds;
mod plan;

pub use date::StartDate;
pub use kinds::{CampaignKind, CampaignMatch};
pub use plan::{AdGroup, Campaign, Keyword, Product, Workspace};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading plan data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid start date: {0}")]
    InvalidDate(String),
}
