//! Listing pipeline
//!
//! validate -> filter -> sort -> paginate. The source collection is only
//! borrowed; each call builds its own view and clones just the returned page.

use std::sync::Arc;

use campaigns_core::{paginate, CoreResult, Paginated, QueryErrors, QueryLimits};
use campaigns_models::{Campaign, CampaignRepository};
use tracing::debug;

use crate::params::CampaignQueryParams;
use crate::query::CampaignQuery;
use crate::validation::validate;

/// Apply a validated query to a collection
pub fn execute(campaigns: &[Campaign], query: &CampaignQuery) -> Paginated<Campaign> {
    let mut matches = query.filters().apply(campaigns);
    query.sort.sort(&mut matches);

    let page = paginate(matches, query.page, query.limit);
    debug!(
        total = page.info.total,
        page = page.info.page,
        limit = page.info.limit,
        sort = query.sort.as_str(),
        filtered = query.has_filters(),
        "Campaign query executed"
    );

    page.map(Campaign::clone)
}

/// Validate raw parameters, then apply them to a collection
pub fn run(
    campaigns: &[Campaign],
    params: &CampaignQueryParams,
    limits: &QueryLimits,
) -> Result<Paginated<Campaign>, QueryErrors> {
    let query = validate(params, limits).map_err(|errors| {
        debug!(errors = errors.len(), "Campaign query rejected");
        errors
    })?;
    Ok(execute(campaigns, &query))
}

/// Campaign listing service over an injected repository
#[derive(Clone)]
pub struct CampaignListing {
    repository: Arc<dyn CampaignRepository>,
    limits: QueryLimits,
}

impl CampaignListing {
    pub fn new(repository: Arc<dyn CampaignRepository>, limits: QueryLimits) -> Self {
        Self { repository, limits }
    }

    /// List campaigns for raw request parameters.
    ///
    /// Validation happens before the repository is read, so a rejected query
    /// never touches the data source.
    pub fn list(&self, params: &CampaignQueryParams) -> CoreResult<Paginated<Campaign>> {
        let query = validate(params, &self.limits)?;
        self.list_query(&query)
    }

    /// List campaigns for an already validated query
    pub fn list_query(&self, query: &CampaignQuery) -> CoreResult<Paginated<Campaign>> {
        let campaigns = self.repository.find_all()?;
        Ok(execute(&campaigns, query))
    }
}
