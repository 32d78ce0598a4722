//! Sponsored Display sheet.

use super::entity;
use crate::config::BulksheetConfig;
use crate::document::Sheet;
use crate::headers::{self as h, SheetKind};
use crate::mappers::{Tactic, asin_expression, audience_expression, tactic_for_theme};
use crate::row::RowFields;
use ppcplan_types::{AdGroup, Campaign, StartDate};
use tracing::debug;

const KIND: SheetKind = SheetKind::SponsoredDisplay;

pub const COST_TYPE_CPC: &str = "cpc";

pub fn generate(
    campaigns: &[&Campaign],
    ad_groups: &[AdGroup],
    start_date: StartDate,
    config: &BulksheetConfig,
) -> Sheet {
    let mut sheet = Sheet::new(KIND);
    let headers = KIND.headers();

    for campaign in campaigns {
        let tactic = tactic_for_theme(&campaign.theme);

        let fields = RowFields::entity(KIND, entity::CAMPAIGN)
            .text(h::CAMPAIGN_ID, &campaign.name)
            .text(h::CAMPAIGN_NAME, &campaign.name)
            .text(h::START_DATE, start_date.to_string())
            .number(h::DAILY_BUDGET, campaign.budget)
            .text(h::COST_TYPE, COST_TYPE_CPC)
            .text(h::TACTIC, tactic.code());
        sheet.push(fields.build(headers));

        for ad_group in campaign.ad_groups_in(ad_groups) {
            let fields = child(campaign, ad_group, entity::AD_GROUP)
                .text(h::AD_GROUP_NAME, &ad_group.name)
                .opt_number(h::AD_GROUP_DEFAULT_BID, ad_group.default_bid);
            sheet.push(fields.build(headers));

            match tactic {
                Tactic::Remarketing => {
                    match audience_expression(
                        campaign.campaign_type.as_deref(),
                        config.audience_lookback_days,
                    ) {
                        Some(expression) => {
                            let fields = child(campaign, ad_group, entity::AUDIENCE_TARGETING)
                                .text(h::AUDIENCE_TARGETING_EXPRESSION, expression);
                            sheet.push(fields.build(headers));
                        }
                        None => debug!(
                            "No remarketing audience in campaign type {:?} for {}; skipping",
                            campaign.campaign_type, campaign.name
                        ),
                    }
                }
                Tactic::Contextual => {
                    for product in &ad_group.products {
                        let fields = child(campaign, ad_group, entity::PRODUCT_TARGETING)
                            .text(h::PRODUCT_TARGETING_EXPRESSION, asin_expression(&product.asin));
                        sheet.push(fields.build(headers));
                    }
                }
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
        "Sponsored Display: {} campaigns -> {} rows",
        campaigns.len(),
        sheet.data_rows().len()
    );
    sheet
}

fn child(campaign: &Campaign, ad_group: &AdGroup, entity: &str) -> RowFields {
    RowFields::entity(KIND, entity)
        .text(h::CAMPAIGN_ID, &campaign.name)
        .text(h::AD_GROUP_ID, &ad_group.name)
}
