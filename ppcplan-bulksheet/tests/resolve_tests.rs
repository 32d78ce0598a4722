use ppcplan_bulksheet::Targeting;
use ppcplan_bulksheet::resolve::*;
use ppcplan_types::{AdGroup, Campaign, CampaignKind, CampaignMatch, Keyword};

fn campaign(match_mode: CampaignMatch) -> Campaign {
    Campaign::new("c", "Campaign", CampaignKind::Sp, match_mode)
}

// ── Keyword bids ─────────────────────────────────────────────────

#[test]
fn keyword_bid_override_wins() {
    let ag = AdGroup::new("ag", "c", "G").with_default_bid(0.75);
    let kw = Keyword::new("k", "t", "EXACT").with_override_bid(1.23);
    assert_eq!(resolve_keyword_bid(&kw, &ag), Some(1.23));
}

#[test]
fn keyword_bid_falls_back_to_default() {
    let ag = AdGroup::new("ag", "c", "G").with_default_bid(0.75);
    let kw = Keyword::new("k", "t", "EXACT");
    assert_eq!(resolve_keyword_bid(&kw, &ag), Some(0.75));
}

#[test]
fn keyword_bid_absent_when_nothing_set() {
    let ag = AdGroup::new("ag", "c", "G");
    let kw = Keyword::new("k", "t", "EXACT");
    assert_eq!(resolve_keyword_bid(&kw, &ag), None);
}

#[test]
fn brands_bid_chain() {
    let with_bid = AdGroup::new("ag", "c", "G").with_default_bid(0.9);
    let without_bid = AdGroup::new("ag", "c", "G");
    let plain = Keyword::new("k", "t", "EXACT");
    let overridden = Keyword::new("k", "t", "EXACT").with_override_bid(2.0);

    assert_eq!(resolve_brands_keyword_bid(&overridden, Some(&with_bid), 1.0), 2.0);
    assert_eq!(resolve_brands_keyword_bid(&plain, Some(&with_bid), 1.0), 0.9);
    assert_eq!(resolve_brands_keyword_bid(&plain, Some(&without_bid), 1.0), 1.0);
    assert_eq!(resolve_brands_keyword_bid(&plain, None, 1.0), 1.0);
}

// ── Campaign bidding strategy ────────────────────────────────────

#[test]
fn campaign_strategy_skips_other_campaigns_groups() {
    let groups = vec![
        AdGroup::new("x", "other", "X").with_bidding_strategy("fixed"),
        AdGroup::new("a", "c", "A").with_bidding_strategy("up_down"),
    ];
    assert_eq!(
        resolve_campaign_bidding_strategy(&campaign(CampaignMatch::Exact), &groups),
        "Dynamic bids - up and down"
    );
}

#[test]
fn campaign_strategy_default_without_groups() {
    assert_eq!(
        resolve_campaign_bidding_strategy(&campaign(CampaignMatch::Exact), &[]),
        "Dynamic bids - down only"
    );
}

// ── Targeting ────────────────────────────────────────────────────

#[test]
fn targeting_auto() {
    let ag = AdGroup::new("ag", "c", "G").with_match_type("LOOSE");
    let t = Targeting::for_ad_group(&campaign(CampaignMatch::Auto), &ag);
    assert_eq!(t, Targeting::Auto(Some("loose-match")));
    assert_eq!(t.row_count(), 1);
}

#[test]
fn targeting_auto_unresolved() {
    let ag = AdGroup::new("ag", "c", "G").with_match_type("WHATEVER");
    let t = Targeting::for_ad_group(&campaign(CampaignMatch::Auto), &ag);
    assert_eq!(t, Targeting::Auto(None));
    assert_eq!(t.row_count(), 0);
}

#[test]
fn targeting_product_targets() {
    let ag = AdGroup::new("ag", "c", "G").with_product_targets([" B01 ", "", "B02"]);
    let t = Targeting::for_ad_group(&campaign(CampaignMatch::Pt), &ag);
    assert_eq!(t, Targeting::ProductTargets(vec!["B01", "B02"]));
    assert_eq!(t.row_count(), 2);
}

#[test]
fn targeting_keywords_for_manual_modes() {
    let ag = AdGroup::new("ag", "c", "G")
        .with_keyword(Keyword::new("k1", "a", "EXACT"))
        .with_keyword(Keyword::new("k2", "b", "BROAD"));
    for m in [
        CampaignMatch::Broad,
        CampaignMatch::Phrase,
        CampaignMatch::Exact,
        CampaignMatch::Video,
        CampaignMatch::Other,
    ] {
        let t = Targeting::for_ad_group(&campaign(m), &ag);
        assert!(matches!(t, Targeting::Keywords(kws) if kws.len() == 2), "{m:?}");
    }
}
