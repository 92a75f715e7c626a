//! # campaigns-models
//!
//! Domain models for the Campaigns API.
//!
//! - `campaign` - the `Campaign` record and its closed enumerations
//! - `repository` - read-only access to the campaign collection

pub mod campaign;
pub mod repository;

pub use campaign::{Campaign, CampaignId, CampaignStatus, Niche, Platform};
pub use repository::{CampaignRepository, InMemoryCampaignRepository};
