//! Campaigns API handlers

use axum::{extract::State, Json};
use campaigns_core::{PageInfo, Paginated};
use campaigns_models::Campaign;
use serde::Serialize;

use crate::error::ApiResult;
use crate::extractors::{AppState, CampaignParams};

/// List campaigns
///
/// GET /api/v1/campaign
pub async fn list_campaigns(
    State(state): State<AppState>,
    params: CampaignParams,
) -> ApiResult<Json<CampaignListResponse>> {
    let page = state.listing.list(&params)?;
    Ok(Json(CampaignListResponse::from(page)))
}

/// Successful listing body
#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub success: bool,
    pub pagination: PageInfo,
    /// Number of campaigns in `data`
    pub count: usize,
    pub data: Vec<Campaign>,
}

impl From<Paginated<Campaign>> for CampaignListResponse {
    fn from(page: Paginated<Campaign>) -> Self {
        Self {
            success: true,
            pagination: page.info,
            count: page.count(),
            data: page.items,
        }
    }
}
