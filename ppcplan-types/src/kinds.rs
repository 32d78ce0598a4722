use serde::{Deserialize, Serialize};
use std::fmt;

/// Which ad product a campaign belongs to. Selects the export sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignKind {
    /// Sponsored Products.
    Sp,
    /// Sponsored Brands.
    Sb,
    /// Sponsored Display.
    Sd,
    /// Any other tag. Campaigns of this kind are not exported.
    #[serde(other)]
    Other,
}

impl CampaignKind {
    /// The short code used by the planning application.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sp => "SP",
            Self::Sb => "SB",
            Self::Sd => "SD",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for CampaignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Campaign-level match mode.
///
/// For Sponsored Products this decides the shape of the targeting rows:
/// `Auto` campaigns get one synthetic auto-targeting clause per ad group,
/// `Pt` campaigns get one ASIN clause per product target, and everything else
/// is treated as a manual keyword campaign. For Sponsored Brands `Video`
/// switches the creative type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignMatch {
    Broad,
    Phrase,
    Exact,
    Auto,
    Pt,
    Video,
    #[serde(other)]
    Other,
}

impl CampaignMatch {
    /// Returns true for automatic-targeting campaigns.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}
