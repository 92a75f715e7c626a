//! Campaign store
//!
//! The listing pipeline reads campaigns through `CampaignRepository`, so the
//! in-memory store can later be swapped for another source without touching
//! query code.

use std::path::Path;
use std::sync::Arc;

use campaigns_core::{CampaignError, CoreResult};
use tracing::{debug, info};
use validator::Validate;

use crate::campaign::Campaign;

/// Dataset compiled into the binary
const SEED_CAMPAIGNS: &str = include_str!("../data/campaigns.json");

/// Read access to the campaign collection
pub trait CampaignRepository: Send + Sync {
    /// Snapshot of every campaign, in source order
    fn find_all(&self) -> CoreResult<Arc<[Campaign]>>;

    /// Number of campaigns in the collection
    fn count(&self) -> CoreResult<usize>;
}

/// Immutable in-memory campaign store, loaded once at startup
#[derive(Debug, Clone)]
pub struct InMemoryCampaignRepository {
    campaigns: Arc<[Campaign]>,
}

impl InMemoryCampaignRepository {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns: campaigns.into(),
        }
    }

    /// Store backed by the embedded seed dataset
    pub fn seeded() -> CoreResult<Self> {
        Self::from_json_str(SEED_CAMPAIGNS)
    }

    /// Parse and validate a JSON array of campaigns
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let campaigns: Vec<Campaign> = serde_json::from_str(json)
            .map_err(|e| CampaignError::data_source(format!("Malformed campaign data: {}", e)))?;

        for campaign in &campaigns {
            campaign.validate().map_err(|e| {
                CampaignError::data_source(format!("Campaign {} is invalid: {}", campaign.id, e))
            })?;
        }

        debug!(count = campaigns.len(), "Parsed campaign dataset");
        Ok(Self::new(campaigns))
    }

    /// Load the dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CampaignError::data_source(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let repository = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = repository.campaigns.len(), "Loaded campaigns from file");
        Ok(repository)
    }
}

impl CampaignRepository for InMemoryCampaignRepository {
    fn find_all(&self) -> CoreResult<Arc<[Campaign]>> {
        Ok(Arc::clone(&self.campaigns))
    }

    fn count(&self) -> CoreResult<usize> {
        Ok(self.campaigns.len())
    }
}
