//! The campaign → ad group → {keyword | product target | product} tree.
//!
//! Field names follow the planning application's camelCase JSON so a saved
//! workspace can be loaded as-is.

use crate::{CampaignKind, CampaignMatch, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// A planning workspace: one brand and its campaigns and ad groups.
///
/// Ad groups are stored flat and linked to campaigns by `campaign_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Campaign>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ad_groups: Vec<AdGroup>,
}

impl Workspace {
    /// Creates an empty workspace for a brand.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            ..Self::default()
        }
    }

    /// Parses a saved workspace. A JSON `null` yields `None`.
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        Ok(serde_json::from_str::<Option<Self>>(json)?)
    }

    /// Serializes the workspace back to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Campaigns of one kind, in input order.
    pub fn campaigns_of(&self, kind: CampaignKind) -> Vec<&Campaign> {
        self.campaigns.iter().filter(|c| c.kind == kind).collect()
    }

    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.campaigns.push(campaign);
        self
    }

    pub fn with_ad_group(mut self, ad_group: AdGroup) -> Self {
        self.ad_groups.push(ad_group);
        self
    }
}

/// A campaign in the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CampaignKind,
    #[serde(rename = "match")]
    pub match_mode: CampaignMatch,
    /// Free-form theme. `REMARKETING` selects the SD remarketing tactic.
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: String,
    /// Daily budget.
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: f64,
    /// Top-of-search bid adjustment, percent (0-100).
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement_top: f64,
    /// Product-page bid adjustment, percent (0-100).
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement_product: f64,
    /// Sub-type tag such as `SD_REMARKETING_VIEWS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
}

impl Campaign {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: CampaignKind,
        match_mode: CampaignMatch,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            match_mode,
            theme: String::new(),
            budget: 0.0,
            placement_top: 0.0,
            placement_product: 0.0,
            campaign_type: None,
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_placements(mut self, top: f64, product: f64) -> Self {
        self.placement_top = top;
        self.placement_product = product;
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_campaign_type(mut self, campaign_type: impl Into<String>) -> Self {
        self.campaign_type = Some(campaign_type.into());
        self
    }

    /// This campaign's ad groups among `ad_groups`, in input order.
    pub fn ad_groups_in<'a>(&'a self, ad_groups: &'a [AdGroup]) -> impl Iterator<Item = &'a AdGroup> {
        ad_groups.iter().filter(move |ag| ag.campaign_id == self.id)
    }
}

/// An ad group. Belongs to exactly one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    pub id: String,
    pub campaign_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_bid: Option<f64>,
    /// Bidding strategy code (`fixed`, `down`, `up_down`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub bidding_strategy: String,
    /// Keyword match code, or an auto-targeting code for AUTO campaigns.
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<Keyword>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    /// Competitor ASINs for product-targeting campaigns.
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_targets: Vec<String>,
}

impl AdGroup {
    pub fn new(id: impl Into<String>, campaign_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            campaign_id: campaign_id.into(),
            name: name.into(),
            default_bid: None,
            bidding_strategy: String::new(),
            match_type: String::new(),
            keywords: Vec::new(),
            products: Vec::new(),
            product_targets: Vec::new(),
        }
    }

    pub fn with_default_bid(mut self, bid: f64) -> Self {
        self.default_bid = Some(bid);
        self
    }

    pub fn with_bidding_strategy(mut self, code: impl Into<String>) -> Self {
        self.bidding_strategy = code.into();
        self
    }

    pub fn with_match_type(mut self, code: impl Into<String>) -> Self {
        self.match_type = code.into();
        self
    }

    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_product_targets<I, S>(mut self, asins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product_targets.extend(asins.into_iter().map(Into::into));
        self
    }
}

/// A keyword attached to an ad group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub id: String,
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_type: String,
    /// Replaces the ad group's default bid on this keyword's row only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_bid: Option<f64>,
}

impl Keyword {
    pub fn new(id: impl Into<String>, text: impl Into<String>, match_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            match_type: match_type.into(),
            override_bid: None,
        }
    }

    pub fn with_override_bid(mut self, bid: f64) -> Self {
        self.override_bid = Some(bid);
        self
    }
}

/// An advertised product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub asin: String,
}

impl Product {
    pub fn new(id: impl Into<String>, sku: impl Into<String>, asin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            asin: asin.into(),
        }
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
