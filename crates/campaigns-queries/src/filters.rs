//! Query Filters
//!
//! Each filter is a predicate on one campaign attribute. A `FilterSet` keeps
//! a campaign only when every filter in it matches.

use campaigns_models::{Campaign, CampaignStatus, Niche, Platform};

/// A single filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignFilter {
    /// Lower-cased term contained in the title, brand or any tag
    Search(String),
    /// Exact niche
    Niche(Niche),
    /// Campaign runs on the platform
    Platform(Platform),
    /// Exact status
    Status(CampaignStatus),
}

impl CampaignFilter {
    /// Build a search filter, normalizing the term (trimmed, lower-cased)
    pub fn search(term: &str) -> Self {
        Self::Search(normalize_term(term))
    }

    /// The attribute this filter inspects
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Search(_) => attributes::SEARCH,
            Self::Niche(_) => attributes::NICHE,
            Self::Platform(_) => attributes::PLATFORMS,
            Self::Status(_) => attributes::STATUS,
        }
    }

    pub fn matches(&self, campaign: &Campaign) -> bool {
        match self {
            Self::Search(term) => campaign.matches_term(term),
            Self::Niche(niche) => campaign.niche == *niche,
            Self::Platform(platform) => campaign.runs_on(*platform),
            Self::Status(status) => campaign.status == *status,
        }
    }
}

/// Normalize a free-text search term
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase().trim().to_string()
}

/// Known filter attributes for campaigns
pub mod attributes {
    pub const SEARCH: &str = "search";
    pub const NICHE: &str = "niche";
    pub const PLATFORMS: &str = "platforms";
    pub const STATUS: &str = "status";
}

/// Filter set - a collection of filters with AND semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<CampaignFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the set
    pub fn add(&mut self, filter: CampaignFilter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter and return self (builder pattern)
    pub fn with(mut self, filter: CampaignFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[CampaignFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if a specific attribute is being filtered
    pub fn has_filter_for(&self, attribute: &str) -> bool {
        self.filters.iter().any(|f| f.attribute() == attribute)
    }

    /// True when every filter matches; an empty set matches everything
    pub fn matches(&self, campaign: &Campaign) -> bool {
        self.filters.iter().all(|f| f.matches(campaign))
    }

    /// Keep the matching campaigns, preserving their order
    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        campaigns.iter().filter(|c| self.matches(c)).collect()
    }
}
