//! API routes

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::handle_panic;
use crate::extractors::AppState;
use crate::handlers::campaigns;

/// Banner served at the root path
const ROOT_BANNER: &str = "Campaigns API";

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api_v1_router())
}

fn api_v1_router() -> Router<AppState> {
    Router::new().route("/campaign", get(campaigns::list_campaigns))
}

/// Router with state applied and panics converted into 500 responses
pub fn app(state: AppState) -> Router {
    router()
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn root() -> &'static str {
    ROOT_BANNER
}
