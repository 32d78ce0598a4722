//! Sponsored Brands sheet.
//!
//! Creatives and keywords live at campaign scope in this format, so no ad
//! group rows are written: products of all child ad groups feed the landing
//! page, and their keywords are pooled under the campaign.

use super::entity;
use crate::config::BulksheetConfig;
use crate::document::Sheet;
use crate::headers::{self as h, SheetKind};
use crate::mappers::match_type_label;
use crate::resolve::resolve_brands_keyword_bid;
use crate::row::RowFields;
use ppcplan_types::{AdGroup, Campaign, CampaignMatch, StartDate};
use std::collections::HashSet;
use tracing::debug;

const KIND: SheetKind = SheetKind::SponsoredBrands;

pub const BIDDING_STRATEGY: &str = "Maximize impressions";
pub const CREATIVE_VIDEO: &str = "Video";
pub const CREATIVE_PRODUCT_COLLECTION: &str = "Product Collection";

pub fn generate(
    campaigns: &[&Campaign],
    ad_groups: &[AdGroup],
    brand: &str,
    start_date: StartDate,
    config: &BulksheetConfig,
) -> Sheet {
    let mut sheet = Sheet::new(KIND);
    let headers = KIND.headers();
    let headline = config.headline(brand);

    for campaign in campaigns {
        let groups: Vec<&AdGroup> = campaign.ad_groups_in(ad_groups).collect();
        let creative_type = match campaign.match_mode {
            CampaignMatch::Video => CREATIVE_VIDEO,
            _ => CREATIVE_PRODUCT_COLLECTION,
        };
        let landing_asins = landing_page_asins(&groups);

        let fields = RowFields::entity(KIND, entity::CAMPAIGN)
            .text(h::CAMPAIGN_ID, &campaign.name)
            .text(h::CAMPAIGN_NAME, &campaign.name)
            .text(h::START_DATE, start_date.to_string())
            .number(h::DAILY_BUDGET, campaign.budget)
            .text(h::BIDDING_STRATEGY, BIDDING_STRATEGY)
            .text(h::CREATIVE_TYPE, creative_type)
            .opt_text(
                h::LANDING_PAGE_ASINS,
                (!landing_asins.is_empty()).then(|| landing_asins.join(",")),
            )
            .text(h::BRAND_NAME, brand)
            .text(h::HEADLINE, &headline);
        sheet.push(fields.build(headers));

        let first = groups.first().copied();
        for keyword in groups.iter().flat_map(|ag| ag.keywords.iter()) {
            let bid = resolve_brands_keyword_bid(keyword, first, config.fallback_keyword_bid);
            let fields = RowFields::entity(KIND, entity::KEYWORD)
                .text(h::CAMPAIGN_ID, &campaign.name)
                .number(h::BID, bid)
                .text(h::KEYWORD_TEXT, &keyword.text)
                .text(h::MATCH_TYPE, match_type_label(&keyword.match_type));
            sheet.push(fields.build(headers));
        }
    }

    debug!(
        "Sponsored Brands: {} campaigns -> {} rows",
        campaigns.len(),
        sheet.data_rows().len()
    );
    sheet
}

/// ASINs of every product under the campaign, first occurrence wins.
fn landing_page_asins<'a>(groups: &[&'a AdGroup]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .copied()
        .flat_map(|ag| ag.products.iter())
        .map(|p| p.asin.as_str())
        .filter(|asin| seen.insert(*asin))
        .collect()
}
