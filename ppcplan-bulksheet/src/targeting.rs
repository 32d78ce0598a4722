//! Sponsored Products targeting for one ad group.

use crate::mappers::auto_targeting_expression;
use ppcplan_types::{AdGroup, Campaign, CampaignMatch, Keyword};

/// How an SP ad group is targeted. Exactly one applies per campaign.
#[derive(Debug, Clone, PartialEq)]
pub enum Targeting<'a> {
    /// One synthetic auto-targeting clause. `None` if the ad group's match
    /// code maps to no known expression, in which case no row is written.
    Auto(Option<&'static str>),
    /// One ASIN clause per competitor ASIN, trimmed, blanks removed.
    ProductTargets(Vec<&'a str>),
    /// Manual keywords.
    Keywords(&'a [Keyword]),
}

impl<'a> Targeting<'a> {
    /// Derives the targeting from the parent campaign's match mode.
    pub fn for_ad_group(campaign: &Campaign, ad_group: &'a AdGroup) -> Self {
        match campaign.match_mode {
            CampaignMatch::Auto => Self::Auto(auto_targeting_expression(&ad_group.match_type)),
            CampaignMatch::Pt => Self::ProductTargets(
                ad_group
                    .product_targets
                    .iter()
                    .map(|asin| asin.trim())
                    .filter(|asin| !asin.is_empty())
                    .collect(),
            ),
            CampaignMatch::Broad
            | CampaignMatch::Phrase
            | CampaignMatch::Exact
            | CampaignMatch::Video
            | CampaignMatch::Other => Self::Keywords(&ad_group.keywords),
        }
    }

    /// Number of targeting rows this produces.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Auto(expr) => usize::from(expr.is_some()),
            Self::ProductTargets(asins) => asins.len(),
            Self::Keywords(keywords) => keywords.len(),
        }
    }
}
