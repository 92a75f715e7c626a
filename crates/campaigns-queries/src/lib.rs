//! # campaigns-queries
//!
//! Query system for the campaign listing.
//!
//! Raw request parameters are validated into a typed `CampaignQuery`, which
//! the pipeline then applies to the campaign collection: filter, sort,
//! paginate.
//!
//! ## Structure
//!
//! - `params` - Raw, untyped request parameters
//! - `validation` - Conversion of raw parameters into a `CampaignQuery`
//! - `filters` - Filter predicates with AND semantics
//! - `sorts` - Supported orderings
//! - `query` - The validated query
//! - `builder` - Fluent API for constructing queries in code
//! - `pipeline` - Filter, sort and paginate a collection
//!
//! ## Example
//!
//! ```
//! use campaigns_core::QueryLimits;
//! use campaigns_models::InMemoryCampaignRepository;
//! use campaigns_queries::{pipeline, CampaignQueryParams};
//!
//! let repo = InMemoryCampaignRepository::seeded().unwrap();
//! let campaigns = campaigns_models::CampaignRepository::find_all(&repo).unwrap();
//!
//! let params = CampaignQueryParams::from_pairs([("niche", "Crypto"), ("limit", "2")]);
//! let page = pipeline::run(&campaigns, &params, &QueryLimits::default()).unwrap();
//!
//! assert!(page.count() <= 2);
//! ```

pub mod builder;
pub mod filters;
pub mod params;
pub mod pipeline;
pub mod query;
pub mod sorts;
pub mod validation;

// Re-exports for convenience
pub use builder::CampaignQueryBuilder;
pub use filters::{CampaignFilter, FilterSet};
pub use params::CampaignQueryParams;
pub use pipeline::CampaignListing;
pub use query::CampaignQuery;
pub use sorts::{SortDirection, SortKey};
pub use validation::{validate, QueryValue};
