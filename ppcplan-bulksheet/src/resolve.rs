//! Fallback chains for derived cells.

use crate::mappers::bidding_strategy_label;
use ppcplan_types::{AdGroup, Campaign, Keyword};

/// Keyword bid on an ad-group-scoped row: the keyword's override, else the
/// ad group's default bid. `None` leaves the cell empty.
pub fn resolve_keyword_bid(keyword: &Keyword, ad_group: &AdGroup) -> Option<f64> {
    keyword.override_bid.or(ad_group.default_bid)
}

/// Keyword bid on a Sponsored Brands row, where keywords are pooled at
/// campaign scope: override, else the campaign's first ad group's default
/// bid, else `fallback`.
pub fn resolve_brands_keyword_bid(
    keyword: &Keyword,
    first_ad_group: Option<&AdGroup>,
    fallback: f64,
) -> f64 {
    keyword
        .override_bid
        .or_else(|| first_ad_group.and_then(|ag| ag.default_bid))
        .unwrap_or(fallback)
}

/// Campaign-level bidding strategy label for Sponsored Products.
///
/// Campaigns carry no strategy of their own; the label comes from the first
/// of the campaign's ad groups in `ad_groups`. With no ad groups the mapper's
/// default applies.
pub fn resolve_campaign_bidding_strategy(campaign: &Campaign, ad_groups: &[AdGroup]) -> &'static str {
    let code = campaign
        .ad_groups_in(ad_groups)
        .next()
        .map(|ag| ag.bidding_strategy.as_str())
        .unwrap_or_default();
    bidding_strategy_label(code)
}
