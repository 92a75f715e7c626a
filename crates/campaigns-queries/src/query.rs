//! Validated campaign query

use campaigns_core::{DEFAULT_LIMIT, DEFAULT_PAGE};
use campaigns_models::{CampaignStatus, Niche, Platform};

use crate::filters::{CampaignFilter, FilterSet};
use crate::sorts::SortKey;

/// A fully validated listing query.
///
/// Only produced by `validation::validate` or `CampaignQueryBuilder`, so every
/// field already holds an allowed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignQuery {
    /// Normalized search term (trimmed, lower-cased)
    pub search: Option<String>,
    pub niche: Option<Niche>,
    pub platform: Option<Platform>,
    pub status: Option<CampaignStatus>,
    pub sort: SortKey,
    /// Requested page, before clamping against the result size
    pub page: usize,
    /// Effective page size
    pub limit: usize,
}

impl Default for CampaignQuery {
    fn default() -> Self {
        Self {
            search: None,
            niche: None,
            platform: None,
            status: None,
            sort: SortKey::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CampaignQuery {
    /// Filters implied by this query
    pub fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        if let Some(term) = &self.search {
            filters.add(CampaignFilter::Search(term.clone()));
        }
        if let Some(niche) = self.niche {
            filters.add(CampaignFilter::Niche(niche));
        }
        if let Some(platform) = self.platform {
            filters.add(CampaignFilter::Platform(platform));
        }
        if let Some(status) = self.status {
            filters.add(CampaignFilter::Status(status));
        }
        filters
    }

    pub fn has_filters(&self) -> bool {
        self.search.is_some()
            || self.niche.is_some()
            || self.platform.is_some()
            || self.status.is_some()
    }
}
