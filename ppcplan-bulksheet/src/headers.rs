//! Column schemas for the three Bulksheets 2.0 sheets.
//!
//! Column position is the contract with the bulk importer, so every schema is
//! a plain ordered slice. Do not reorder.

pub const PRODUCT: &str = "Product";
pub const ENTITY: &str = "Entity";
pub const OPERATION: &str = "Operation";
pub const CAMPAIGN_ID: &str = "Campaign ID";
pub const AD_GROUP_ID: &str = "Ad Group ID";
pub const PORTFOLIO_ID: &str = "Portfolio ID";
pub const AD_ID: &str = "Ad ID (Read only)";
pub const KEYWORD_ID: &str = "Keyword ID (Read only)";
pub const PRODUCT_TARGETING_ID: &str = "Product Targeting ID (Read only)";
pub const PRODUCT_AD_ID: &str = "Product Ad ID (Read only)";
pub const TARGETING_CLAUSE_ID: &str = "Targeting Clause ID (Read only)";
pub const CAMPAIGN_NAME: &str = "Campaign Name";
pub const AD_GROUP_NAME: &str = "Ad Group Name";
pub const START_DATE: &str = "Start Date";
pub const END_DATE: &str = "End Date";
pub const TARGETING_TYPE: &str = "Targeting Type";
pub const STATE: &str = "State";
pub const DAILY_BUDGET: &str = "Daily Budget";
pub const LIFETIME_BUDGET: &str = "Lifetime Budget";
pub const SKU: &str = "SKU";
pub const ASIN: &str = "ASIN";
pub const AD_GROUP_DEFAULT_BID: &str = "Ad Group Default Bid";
pub const BID: &str = "Bid";
pub const KEYWORD_TEXT: &str = "Keyword Text";
pub const MATCH_TYPE: &str = "Match Type";
pub const BIDDING_STRATEGY: &str = "Bidding Strategy";
pub const PLACEMENT: &str = "Placement";
pub const PERCENTAGE: &str = "Percentage";
pub const PRODUCT_TARGETING_EXPRESSION: &str = "Product Targeting Expression";
pub const AUDIENCE_TARGETING_EXPRESSION: &str = "Audience Targeting Expression";
pub const CREATIVE_TYPE: &str = "Creative Type";
pub const LANDING_PAGE_ASINS: &str = "Landing Page ASINs";
pub const BRAND_NAME: &str = "Brand Name";
pub const BRAND_ENTITY_ID: &str = "Brand Entity ID";
pub const HEADLINE: &str = "Headline";
pub const LOGO_ASSET_ID: &str = "Logo Asset ID";
pub const VIDEO_MEDIA_ID: &str = "Video Media ID";
pub const STORE_PAGE_ID: &str = "Store Page ID";
pub const COST_TYPE: &str = "Cost Type";
pub const TACTIC: &str = "Tactic";

pub const SPONSORED_PRODUCTS: &[&str] = &[
    PRODUCT,
    ENTITY,
    OPERATION,
    CAMPAIGN_ID,
    AD_GROUP_ID,
    PORTFOLIO_ID,
    AD_ID,
    KEYWORD_ID,
    PRODUCT_TARGETING_ID,
    CAMPAIGN_NAME,
    AD_GROUP_NAME,
    START_DATE,
    END_DATE,
    TARGETING_TYPE,
    STATE,
    DAILY_BUDGET,
    SKU,
    ASIN,
    AD_GROUP_DEFAULT_BID,
    BID,
    KEYWORD_TEXT,
    MATCH_TYPE,
    BIDDING_STRATEGY,
    PLACEMENT,
    PERCENTAGE,
    PRODUCT_TARGETING_EXPRESSION,
];

pub const SPONSORED_BRANDS: &[&str] = &[
    PRODUCT,
    ENTITY,
    OPERATION,
    CAMPAIGN_ID,
    KEYWORD_ID,
    PRODUCT_TARGETING_ID,
    CAMPAIGN_NAME,
    START_DATE,
    END_DATE,
    STATE,
    DAILY_BUDGET,
    LIFETIME_BUDGET,
    BIDDING_STRATEGY,
    CREATIVE_TYPE,
    LANDING_PAGE_ASINS,
    BRAND_NAME,
    BRAND_ENTITY_ID,
    HEADLINE,
    LOGO_ASSET_ID,
    VIDEO_MEDIA_ID,
    STORE_PAGE_ID,
    BID,
    KEYWORD_TEXT,
    MATCH_TYPE,
    PRODUCT_TARGETING_EXPRESSION,
];

pub const SPONSORED_DISPLAY: &[&str] = &[
    PRODUCT,
    ENTITY,
    OPERATION,
    CAMPAIGN_ID,
    AD_GROUP_ID,
    PRODUCT_AD_ID,
    TARGETING_CLAUSE_ID,
    CAMPAIGN_NAME,
    START_DATE,
    END_DATE,
    STATE,
    DAILY_BUDGET,
    LIFETIME_BUDGET,
    COST_TYPE,
    TACTIC,
    AD_GROUP_NAME,
    AD_GROUP_DEFAULT_BID,
    PRODUCT_TARGETING_EXPRESSION,
    AUDIENCE_TARGETING_EXPRESSION,
    SKU,
    ASIN,
];

/// The three sheets a bulk document can contain, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    SponsoredProducts,
    SponsoredBrands,
    SponsoredDisplay,
}

impl SheetKind {
    pub const ALL: [SheetKind; 3] = [
        SheetKind::SponsoredProducts,
        SheetKind::SponsoredBrands,
        SheetKind::SponsoredDisplay,
    ];

    /// Tab name in the workbook. Also the value of every row's `Product` cell.
    #[must_use]
    pub const fn tab_name(&self) -> &'static str {
        match self {
            Self::SponsoredProducts => "Sponsored Products",
            Self::SponsoredBrands => "Sponsored Brands",
            Self::SponsoredDisplay => "Sponsored Display",
        }
    }

    /// Ordered column list for this sheet.
    #[must_use]
    pub const fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::SponsoredProducts => SPONSORED_PRODUCTS,
            Self::SponsoredBrands => SPONSORED_BRANDS,
            Self::SponsoredDisplay => SPONSORED_DISPLAY,
        }
    }
}
