//! Axum extractors and shared state for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use campaigns_core::{QueryErrors, QueryLimits};
use campaigns_models::CampaignRepository;
use campaigns_queries::{CampaignListing, CampaignQueryParams};
use tracing::debug;

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub listing: CampaignListing,
}

impl AppState {
    pub fn new(repository: Arc<dyn CampaignRepository>, limits: QueryLimits) -> Self {
        Self {
            listing: CampaignListing::new(repository, limits),
        }
    }
}

/// Raw campaign listing parameters taken from the query string.
///
/// Decoding goes through key/value pairs, so repeated or unknown keys never
/// cause a rejection here; only an undecodable query string does.
pub struct CampaignParams(pub CampaignQueryParams);

#[async_trait]
impl<S> FromRequestParts<S> for CampaignParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection, "Undecodable query string");
                ApiError::InvalidQuery(QueryErrors::from(vec![format!(
                    "Malformed query string: {}",
                    rejection.body_text()
                )]))
            })?;

        Ok(CampaignParams(CampaignQueryParams::from_pairs(pairs)))
    }
}

impl std::ops::Deref for CampaignParams {
    type Target = CampaignQueryParams;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
