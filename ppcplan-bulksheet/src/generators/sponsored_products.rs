//! Sponsored Products sheet.
//!
//! Per campaign: a campaign row, up to two placement adjustments, then for
//! each ad group an ad group row, its targeting rows and its product ads.

use super::entity;
use crate::document::Sheet;
use crate::headers::{self as h, SheetKind};
use crate::mappers::{asin_expression, match_type_label};
use crate::resolve::{resolve_campaign_bidding_strategy, resolve_keyword_bid};
use crate::row::RowFields;
use crate::targeting::Targeting;
use ppcplan_types::{AdGroup, Campaign, StartDate};
use tracing::debug;

const KIND: SheetKind = SheetKind::SponsoredProducts;

pub const PLACEMENT_TOP: &str = "Top of search (first page)";
pub const PLACEMENT_PRODUCT_PAGES: &str = "Product pages";

const TARGETING_AUTO: &str = "Auto";
const TARGETING_MANUAL: &str = "Manual";

pub fn generate(campaigns: &[&Campaign], ad_groups: &[AdGroup], start_date: StartDate) -> Sheet {
    let mut sheet = Sheet::new(KIND);
    let headers = KIND.headers();

    for campaign in campaigns {
        sheet.push(campaign_row(campaign, ad_groups, start_date).build(headers));

        if campaign.placement_top > 0.0 {
            sheet.push(placement_row(campaign, PLACEMENT_TOP, campaign.placement_top).build(headers));
        }
        if campaign.placement_product > 0.0 {
            sheet.push(
                placement_row(campaign, PLACEMENT_PRODUCT_PAGES, campaign.placement_product)
                    .build(headers),
            );
        }

        for ad_group in campaign.ad_groups_in(ad_groups) {
            sheet.push(ad_group_row(campaign, ad_group).build(headers));

            for fields in targeting_rows(campaign, ad_group) {
                sheet.push(fields.build(headers));
            }

            for product in &ad_group.products {
                let fields = child(campaign, ad_group, entity::PRODUCT_AD)
                    .text(h::SKU, &product.sku)
                    .text(h::ASIN, &product.asin);
                sheet.push(fields.build(headers));
            }
        }
    }

    debug!(
        "Sponsored Products: {} campaigns -> {} rows",
        campaigns.len(),
        sheet.data_rows().len()
    );
    sheet
}

fn campaign_row(campaign: &Campaign, ad_groups: &[AdGroup], start_date: StartDate) -> RowFields {
    let targeting_type = if campaign.match_mode.is_auto() {
        TARGETING_AUTO
    } else {
        TARGETING_MANUAL
    };
    RowFields::entity(KIND, entity::CAMPAIGN)
        .text(h::CAMPAIGN_ID, &campaign.name)
        .text(h::CAMPAIGN_NAME, &campaign.name)
        .text(h::START_DATE, start_date.to_string())
        .text(h::TARGETING_TYPE, targeting_type)
        .number(h::DAILY_BUDGET, campaign.budget)
        .text(
            h::BIDDING_STRATEGY,
            resolve_campaign_bidding_strategy(campaign, ad_groups),
        )
}

fn placement_row(campaign: &Campaign, placement: &str, percentage: f64) -> RowFields {
    RowFields::entity(KIND, entity::BIDDING_ADJUSTMENT)
        .text(h::CAMPAIGN_ID, &campaign.name)
        .text(h::PLACEMENT, placement)
        .number(h::PERCENTAGE, percentage)
}

fn ad_group_row(campaign: &Campaign, ad_group: &AdGroup) -> RowFields {
    child(campaign, ad_group, entity::AD_GROUP)
        .text(h::AD_GROUP_NAME, &ad_group.name)
        .opt_number(h::AD_GROUP_DEFAULT_BID, ad_group.default_bid)
}

fn targeting_rows(campaign: &Campaign, ad_group: &AdGroup) -> Vec<RowFields> {
    let targeting = Targeting::for_ad_group(campaign, ad_group);
    let mut rows = Vec::with_capacity(targeting.row_count());
    match targeting {
        Targeting::Auto(Some(expression)) => rows.push(
            child(campaign, ad_group, entity::PRODUCT_TARGETING)
                .opt_number(h::BID, ad_group.default_bid)
                .text(h::PRODUCT_TARGETING_EXPRESSION, expression),
        ),
        Targeting::Auto(None) => debug!(
            "No auto-targeting expression for match type {:?} in ad group {}; skipping",
            ad_group.match_type, ad_group.name
        ),
        Targeting::ProductTargets(asins) => rows.extend(asins.into_iter().map(|asin| {
            child(campaign, ad_group, entity::PRODUCT_TARGETING)
                .opt_number(h::BID, ad_group.default_bid)
                .text(h::PRODUCT_TARGETING_EXPRESSION, asin_expression(asin))
        })),
        Targeting::Keywords(keywords) => rows.extend(keywords.iter().map(|keyword| {
            child(campaign, ad_group, entity::KEYWORD)
                .opt_number(h::BID, resolve_keyword_bid(keyword, ad_group))
                .text(h::KEYWORD_TEXT, &keyword.text)
                .text(h::MATCH_TYPE, match_type_label(&keyword.match_type))
        })),
    }
    rows
}

/// A row under an ad group, linked to its parents by name.
fn child(campaign: &Campaign, ad_group: &AdGroup, entity: &str) -> RowFields {
    RowFields::entity(KIND, entity)
        .text(h::CAMPAIGN_ID, &campaign.name)
        .text(h::AD_GROUP_ID, &ad_group.name)
}
