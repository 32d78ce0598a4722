//! Per-product sheet generators.
//!
//! Each generator walks its campaigns in input order and returns a [`Sheet`]
//! (header row first). Generators are pure: the start date and config are
//! injected, nothing is read from the clock or the environment.
//!
//! [`Sheet`]: crate::Sheet

pub mod sponsored_brands;
pub mod sponsored_display;
pub mod sponsored_products;

/// Entity names written to the `Entity` column.
pub mod entity {
    pub const CAMPAIGN: &str = "Campaign";
    pub const BIDDING_ADJUSTMENT: &str = "Bidding Adjustment";
    pub const AD_GROUP: &str = "Ad Group";
    pub const KEYWORD: &str = "Keyword";
    pub const PRODUCT_TARGETING: &str = "Product Targeting";
    pub const AUDIENCE_TARGETING: &str = "Audience Targeting";
    pub const PRODUCT_AD: &str = "Product Ad";
}

