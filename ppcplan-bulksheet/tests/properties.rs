//! Property tests over generated plans.

mod common;

use common::*;
use ppcplan_bulksheet::BulksheetExporter;
use ppcplan_bulksheet::headers::*;
use ppcplan_types::{AdGroup, Campaign, CampaignKind, CampaignMatch, Keyword, Product, Workspace};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = CampaignKind> {
    prop_oneof![
        Just(CampaignKind::Sp),
        Just(CampaignKind::Sb),
        Just(CampaignKind::Sd),
        Just(CampaignKind::Other),
    ]
}

fn arb_match() -> impl Strategy<Value = CampaignMatch> {
    prop_oneof![
        Just(CampaignMatch::Broad),
        Just(CampaignMatch::Phrase),
        Just(CampaignMatch::Exact),
        Just(CampaignMatch::Auto),
        Just(CampaignMatch::Pt),
        Just(CampaignMatch::Video),
        Just(CampaignMatch::Other),
    ]
}

fn arb_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BROAD".to_string()),
        Just("EXACT".to_string()),
        Just("CLOSE".to_string()),
        Just("SUB".to_string()),
        "[A-Z]{0,6}",
    ]
}

fn arb_keyword() -> impl Strategy<Value = Keyword> {
    ("[a-z ]{1,12}", arb_code(), proptest::option::of(0.1f64..5.0)).prop_map(
        |(text, code, bid)| Keyword {
            id: text.clone(),
            text,
            match_type: code,
            override_bid: bid,
        },
    )
}

fn arb_product() -> impl Strategy<Value = Product> {
    "B0[A-Z0-9]{8}".prop_map(|asin| Product::new(asin.clone(), format!("SKU-{asin}"), asin))
}

fn arb_ad_group(campaigns: usize) -> impl Strategy<Value = AdGroup> {
    (
        0..campaigns,
        proptest::option::of(0.1f64..3.0),
        arb_code(),
        prop::collection::vec(arb_keyword(), 0..4),
        prop::collection::vec(arb_product(), 0..3),
        prop::collection::vec("[ ]{0,2}[A-Z0-9]{0,10}", 0..4),
    )
        .prop_map(|(c, bid, code, keywords, products, targets)| AdGroup {
            id: format!("ag-{c}"),
            campaign_id: format!("c{c}"),
            name: format!("Group {c}"),
            default_bid: bid,
            bidding_strategy: "down".into(),
            match_type: code,
            keywords,
            products,
            product_targets: targets,
        })
}

fn arb_workspace() -> impl Strategy<Value = Workspace> {
    prop::collection::vec(
        (arb_kind(), arb_match(), "[A-Z_]{0,12}", 0.0f64..50.0, 0.0f64..50.0),
        1..5,
    )
    .prop_flat_map(|specs| {
        let n = specs.len();
        let campaigns: Vec<Campaign> = specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, m, theme, top, prod))| {
                Campaign::new(format!("c{i}"), format!("Campaign {i}"), kind, m)
                    .with_theme(theme.clone())
                    .with_campaign_type(theme)
                    .with_placements(top, prod)
            })
            .collect();
        (Just(campaigns), prop::collection::vec(arb_ad_group(n), 0..6))
    })
    .prop_map(|(campaigns, ad_groups)| Workspace {
        brand: "Brand".into(),
        campaigns,
        ad_groups,
    })
}

proptest! {
    #[test]
    fn every_row_matches_its_header_width(ws in arb_workspace()) {
        if let Some(doc) = BulksheetExporter::new(start_date()).assemble(&ws) {
            for sheet in doc.sheets() {
                for row in sheet.rows() {
                    prop_assert_eq!(row.len(), sheet.headers().len());
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic(ws in arb_workspace()) {
        let exporter = BulksheetExporter::new(start_date());
        prop_assert_eq!(exporter.assemble(&ws), exporter.assemble(&ws));
    }

    #[test]
    fn no_sheet_is_header_only(ws in arb_workspace()) {
        if let Some(doc) = BulksheetExporter::new(start_date()).assemble(&ws) {
            prop_assert!(!doc.is_empty());
            for sheet in doc.sheets() {
                prop_assert!(sheet.has_data());
            }
        }
    }

    #[test]
    fn pt_campaigns_never_emit_keywords(ws in arb_workspace()) {
        let Some(doc) = BulksheetExporter::new(start_date()).assemble(&ws) else {
            return Ok(());
        };
        let Some(sheet) = doc.sheet("Sponsored Products") else {
            return Ok(());
        };
        let pt_names: Vec<&str> = ws
            .campaigns
            .iter()
            .filter(|c| c.kind == CampaignKind::Sp && c.match_mode == CampaignMatch::Pt)
            .map(|c| c.name.as_str())
            .collect();
        for i in rows_of(sheet, "Keyword") {
            let campaign = sheet.text(i, CAMPAIGN_ID).unwrap_or_default();
            prop_assert!(!pt_names.contains(&campaign));
        }
    }

    #[test]
    fn read_only_ids_are_always_empty(ws in arb_workspace()) {
        if let Some(doc) = BulksheetExporter::new(start_date()).assemble(&ws) {
            for sheet in doc.sheets() {
                for i in 1..sheet.row_count() {
                    for header in sheet.headers().iter().filter(|h| h.ends_with("(Read only)")) {
                        prop_assert!(sheet.cell(i, header).is_none());
                    }
                    prop_assert!(sheet.cell(i, END_DATE).is_none());
                }
            }
        }
    }
}
