//! Translation from plan codes to the vocabulary the bulk importer expects.
//!
//! Every mapper is total. Unknown codes fall back to a documented default or
//! to `None`, never to an error, so one bad value cannot abort an export.

use serde::Serialize;

/// Label used when a bidding-strategy code is not recognized.
pub const DEFAULT_BIDDING_STRATEGY: &str = "Dynamic bids - down only";

/// Label used when a keyword match code is not recognized.
pub const DEFAULT_MATCH_TYPE: &str = "broad";

/// Maps `fixed`, `down` and `up_down` to the importer's bidding-strategy labels.
pub fn bidding_strategy_label(code: &str) -> &'static str {
    match code {
        "fixed" => "Fixed bid",
        "down" => "Dynamic bids - down only",
        "up_down" => "Dynamic bids - up and down",
        _ => DEFAULT_BIDDING_STRATEGY,
    }
}

/// Maps `BROAD`, `PHRASE` and `EXACT` to lowercase match types.
pub fn match_type_label(code: &str) -> &'static str {
    match code {
        "BROAD" => "broad",
        "PHRASE" => "phrase",
        "EXACT" => "exact",
        _ => DEFAULT_MATCH_TYPE,
    }
}

/// Maps an auto-targeting code to its targeting expression.
///
/// Returns `None` for unknown codes; the caller skips the row.
pub fn auto_targeting_expression(code: &str) -> Option<&'static str> {
    match code {
        "CLOSE" => Some("close-match"),
        "LOOSE" => Some("loose-match"),
        "SUB" => Some("substitutes"),
        "COMP" => Some("complements"),
        _ => None,
    }
}

/// `asin="<ASIN>"`. The ASIN is not validated.
pub fn asin_expression(asin: &str) -> String {
    format!("asin=\"{asin}\"")
}

/// Sponsored Display tactic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tactic {
    /// Audience remarketing (`T00020`).
    Remarketing,
    /// Contextual product targeting (`T00030`).
    Contextual,
}

impl Tactic {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Remarketing => "T00020",
            Self::Contextual => "T00030",
        }
    }
}

/// `REMARKETING` selects [`Tactic::Remarketing`]; any other theme is contextual.
pub fn tactic_for_theme(theme: &str) -> Tactic {
    if theme == "REMARKETING" {
        Tactic::Remarketing
    } else {
        Tactic::Contextual
    }
}

/// Remarketing audience picked from a campaign sub-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Audience {
    Views,
    Cart,
    Buyers,
}

impl Audience {
    /// Finds the first of `VIEWS`, `CART`, `BUYERS` contained in the tag.
    pub fn from_campaign_type(campaign_type: &str) -> Option<Self> {
        if campaign_type.contains("VIEWS") {
            Some(Self::Views)
        } else if campaign_type.contains("CART") {
            Some(Self::Cart)
        } else if campaign_type.contains("BUYERS") {
            Some(Self::Buyers)
        } else {
            None
        }
    }
}

#[derive(Serialize)]
struct AudienceExpression {
    #[serde(rename = "type")]
    audience: Audience,
    days: u32,
}

/// Audience expression JSON, e.g. `{"type":"VIEWS","days":30}`.
///
/// Returns `None` when the campaign has no sub-type or the sub-type names no
/// known audience.
pub fn audience_expression(campaign_type: Option<&str>, lookback_days: u32) -> Option<String> {
    let audience = Audience::from_campaign_type(campaign_type?)?;
    serde_json::to_string(&AudienceExpression {
        audience,
        days: lookback_days,
    })
    .ok()
}
