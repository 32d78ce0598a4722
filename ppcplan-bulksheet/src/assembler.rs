//! Binds the per-product sheets into one document.

use crate::config::BulksheetConfig;
use crate::document::{Document, Sheet};
use crate::generators::{sponsored_brands, sponsored_display, sponsored_products};
use crate::headers::SheetKind;
use ppcplan_types::{Campaign, CampaignKind, StartDate, Workspace};
use tracing::{debug, info};

/// Turns a workspace into a bulk document for a given start date.
#[derive(Debug, Clone)]
pub struct BulksheetExporter {
    start_date: StartDate,
    config: BulksheetConfig,
}

impl BulksheetExporter {
    /// Creates an exporter with the default config.
    pub fn new(start_date: StartDate) -> Self {
        Self::with_config(start_date, BulksheetConfig::default())
    }

    pub fn with_config(start_date: StartDate, config: BulksheetConfig) -> Self {
        Self { start_date, config }
    }

    pub fn start_date(&self) -> StartDate {
        self.start_date
    }

    pub fn config(&self) -> &BulksheetConfig {
        &self.config
    }

    /// Like [`assemble`](Self::assemble), but an absent workspace is a no-op.
    pub fn export(&self, workspace: Option<&Workspace>) -> Option<Document> {
        match workspace {
            Some(ws) => self.assemble(ws),
            None => {
                debug!("No workspace to export");
                None
            }
        }
    }

    /// Generates the Sponsored Products, Sponsored Brands and Sponsored
    /// Display sheets, in that order, skipping any with no data rows.
    ///
    /// Returns `None` when no sheet has data.
    pub fn assemble(&self, workspace: &Workspace) -> Option<Document> {
        let mut document = Document::new();

        for kind in SheetKind::ALL {
            let campaigns = workspace.campaigns_of(campaign_kind(kind));
            if campaigns.is_empty() {
                continue;
            }
            let sheet = self.generate(kind, &campaigns, workspace);
            if sheet.has_data() {
                document.append_sheet(sheet);
            } else {
                debug!("{} sheet has no data rows; omitted", sheet.name());
            }
        }

        if document.is_empty() {
            info!("Nothing to export for brand {:?}", workspace.brand);
            return None;
        }
        info!(
            "Assembled bulk document for {:?}: sheets {:?}, {} data rows",
            workspace.brand,
            document.sheet_names(),
            document.data_row_count()
        );
        Some(document)
    }

    fn generate(
        &self,
        kind: SheetKind,
        campaigns: &[&Campaign],
        workspace: &Workspace,
    ) -> Sheet {
        let ad_groups = &workspace.ad_groups;
        match kind {
            SheetKind::SponsoredProducts => {
                sponsored_products::generate(campaigns, ad_groups, self.start_date)
            }
            SheetKind::SponsoredBrands => sponsored_brands::generate(
                campaigns,
                ad_groups,
                &workspace.brand,
                self.start_date,
                &self.config,
            ),
            SheetKind::SponsoredDisplay => {
                sponsored_display::generate(campaigns, ad_groups, self.start_date, &self.config)
            }
        }
    }
}

/// Campaigns feeding each sheet. `CampaignKind::Other` feeds none.
fn campaign_kind(kind: SheetKind) -> CampaignKind {
    match kind {
        SheetKind::SponsoredProducts => CampaignKind::Sp,
        SheetKind::SponsoredBrands => CampaignKind::Sb,
        SheetKind::SponsoredDisplay => CampaignKind::Sd,
    }
}
