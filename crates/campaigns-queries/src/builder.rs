//! Query Builder
//!
//! Fluent API for constructing a `CampaignQuery` in code, without going
//! through raw parameter text.

use campaigns_core::QueryLimits;
use campaigns_models::{CampaignStatus, Niche, Platform};

use crate::filters::normalize_term;
use crate::query::CampaignQuery;
use crate::sorts::SortKey;

/// Builder for constructing queries fluently
#[derive(Debug, Default)]
pub struct CampaignQueryBuilder {
    query: CampaignQuery,
    limits: QueryLimits,
}

impl CampaignQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from custom page size bounds
    pub fn with_limits(limits: QueryLimits) -> Self {
        Self {
            query: CampaignQuery {
                limit: limits.default_limit,
                ..Default::default()
            },
            limits,
        }
    }

    /// Free-text search over title, brand and tags
    pub fn search(mut self, term: &str) -> Self {
        self.query.search = Some(normalize_term(term));
        self
    }

    pub fn niche(mut self, niche: Niche) -> Self {
        self.query.niche = Some(niche);
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.query.platform = Some(platform);
        self
    }

    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.query.status = Some(status);
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.query.sort = sort;
        self
    }

    /// Requested page; values below 1 become 1
    pub fn page(mut self, page: usize) -> Self {
        self.query.page = page.max(1);
        self
    }

    /// Requested page size, capped like a client-supplied limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = self.limits.effective_limit(Some(limit.max(1)));
        self
    }

    pub fn build(self) -> CampaignQuery {
        self.query
    }
}
