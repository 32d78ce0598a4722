//! Shared fixtures for bulksheet tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use ppcplan_bulksheet::{Row, Sheet, headers};
use ppcplan_types::{
    AdGroup, Campaign, CampaignKind, CampaignMatch, Keyword, Product, StartDate, Workspace,
};

/// Fixed export date so expected rows are stable.
pub fn start_date() -> StartDate {
    StartDate::from_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

pub fn sp(id: &str, name: &str, match_mode: CampaignMatch) -> Campaign {
    Campaign::new(id, name, CampaignKind::Sp, match_mode).with_budget(25.0)
}

pub fn sb(id: &str, name: &str, match_mode: CampaignMatch) -> Campaign {
    Campaign::new(id, name, CampaignKind::Sb, match_mode).with_budget(40.0)
}

pub fn sd(id: &str, name: &str, theme: &str) -> Campaign {
    Campaign::new(id, name, CampaignKind::Sd, CampaignMatch::Auto)
        .with_budget(15.0)
        .with_theme(theme)
}

pub fn product(n: u32) -> Product {
    Product::new(format!("p{n}"), format!("SKU-{n}"), format!("B0PROD{n:04}"))
}

/// The PT campaign from the end-to-end example: one ad group, three
/// competitor ASINs, one advertised product, 25% product-page adjustment.
pub fn pt_example() -> Workspace {
    Workspace::new("Kingdom")
        .with_campaign(
            Campaign::new("c1", "SP | Bongs | PT", CampaignKind::Sp, CampaignMatch::Pt)
                .with_budget(30.0)
                .with_placements(0.0, 25.0),
        )
        .with_ad_group(
            AdGroup::new("ag1", "c1", "Competitor ASINs")
                .with_default_bid(1.05)
                .with_bidding_strategy("down")
                .with_product_targets(["B0COMPETE01", "B0COMPETE02", "B0COMPETE03"])
                .with_product(Product::new("p1", "KNG-BONG-STD", "B0ABC123DE")),
        )
}

/// One campaign of every kind, with enough children to exercise each branch.
pub fn mixed_workspace() -> Workspace {
    Workspace::new("Kingdom")
        .with_campaign(sp("sp1", "SP Exact", CampaignMatch::Exact).with_placements(20.0, 10.0))
        .with_campaign(sb("sb1", "SB Collection", CampaignMatch::Broad))
        .with_campaign(
            sd("sd1", "SD Remarketing", "REMARKETING").with_campaign_type("SD_REMARKETING_VIEWS"),
        )
        .with_ad_group(
            AdGroup::new("ag-sp", "sp1", "Exact Terms")
                .with_default_bid(0.75)
                .with_bidding_strategy("fixed")
                .with_keyword(Keyword::new("k1", "glass bong", "EXACT").with_override_bid(1.23))
                .with_keyword(Keyword::new("k2", "water pipe", "EXACT"))
                .with_product(product(1)),
        )
        .with_ad_group(
            AdGroup::new("ag-sb", "sb1", "Brand Terms")
                .with_default_bid(0.9)
                .with_keyword(Keyword::new("k3", "kingdom bong", "PHRASE"))
                .with_product(product(1))
                .with_product(product(2)),
        )
        .with_ad_group(
            AdGroup::new("ag-sd", "sd1", "Viewers")
                .with_default_bid(0.6)
                .with_product(product(1)),
        )
}

/// Data rows whose `Entity` cell equals `entity`, as row indexes.
pub fn rows_of(sheet: &Sheet, entity: &str) -> Vec<usize> {
    (1..sheet.row_count())
        .filter(|&i| sheet.text(i, headers::ENTITY) == Some(entity))
        .collect()
}

/// The `Entity` column of every data row, in order.
pub fn entities(sheet: &Sheet) -> Vec<String> {
    (1..sheet.row_count())
        .map(|i| sheet.text(i, headers::ENTITY).unwrap_or_default().to_string())
        .collect()
}

/// Asserts each row has exactly one cell per header.
pub fn assert_aligned(sheet: &Sheet) {
    let width = sheet.headers().len();
    for (i, row) in sheet.rows().iter().enumerate() {
        assert_eq!(row.len(), width, "row {i} of {} misaligned", sheet.name());
    }
}

/// Number of non-empty cells in a row.
pub fn filled(row: &Row) -> usize {
    row.iter().filter(|c| c.is_some()).count()
}
