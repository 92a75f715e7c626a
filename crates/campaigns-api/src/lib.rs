//! # campaigns-api
//!
//! HTTP handlers for the read-only campaign listing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::{app, router};
