//! Exporter settings, optionally read from a TOML file.

use crate::BulksheetResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

const BRAND_PLACEHOLDER: &str = "{brand}";

/// Tunables for the generated rows. Every field has a default, so an empty
/// file (or no file) yields the stock export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulksheetConfig {
    /// Sponsored Brands headline. `{brand}` is replaced by the brand name.
    #[serde(default = "default_headline_template")]
    pub headline_template: String,
    /// Last link of the Sponsored Brands keyword bid chain.
    #[serde(default = "default_fallback_keyword_bid")]
    pub fallback_keyword_bid: f64,
    /// Lookback window written into remarketing audience expressions.
    #[serde(default = "default_audience_lookback_days")]
    pub audience_lookback_days: u32,
}

fn default_headline_template() -> String {
    "Shop {brand} best sellers now!".to_string()
}

fn default_fallback_keyword_bid() -> f64 {
    1.00
}

fn default_audience_lookback_days() -> u32 {
    30
}

impl Default for BulksheetConfig {
    fn default() -> Self {
        Self {
            headline_template: default_headline_template(),
            fallback_keyword_bid: default_fallback_keyword_bid(),
            audience_lookback_days: default_audience_lookback_days(),
        }
    }
}

impl BulksheetConfig {
    /// Parses TOML, failing on malformed input.
    pub fn parse(contents: &str) -> BulksheetResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads config from `path`.
    /// Falls back to defaults if the file is missing or cannot be read or parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No exporter config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded exporter config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse exporter config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read exporter config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Renders the Sponsored Brands headline for `brand`.
    pub fn headline(&self, brand: &str) -> String {
        self.headline_template.replace(BRAND_PLACEHOLDER, brand)
    }
}
