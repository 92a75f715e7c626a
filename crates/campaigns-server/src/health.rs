//! Health Check System
//!
//! Reports whether the campaign collection is loaded and readable.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campaigns_models::CampaignRepository;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Overall health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Health checker service
pub struct HealthChecker {
    start_time: Instant,
    repository: Arc<dyn CampaignRepository>,
}

impl HealthChecker {
    pub fn new(repository: Arc<dyn CampaignRepository>) -> Self {
        Self {
            start_time: Instant::now(),
            repository,
        }
    }

    pub fn check(&self) -> HealthReport {
        let catalog = self.check_catalog();

        HealthReport {
            status: catalog.status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![catalog],
            timestamp: chrono::Utc::now(),
        }
    }

    fn check_catalog(&self) -> ComponentHealth {
        let (status, message, details) = match self.repository.count() {
            Ok(0) => (
                HealthStatus::Degraded,
                "Campaign collection is empty".to_string(),
                Some(serde_json::json!({ "campaigns": 0 })),
            ),
            Ok(count) => (
                HealthStatus::Healthy,
                "Campaign collection loaded".to_string(),
                Some(serde_json::json!({ "campaigns": count })),
            ),
            Err(e) => {
                warn!(error = %e, "Campaign collection is unreadable");
                (HealthStatus::Unhealthy, e.to_string(), None)
            }
        };

        ComponentHealth {
            name: "catalog".to_string(),
            status,
            message: Some(message),
            details,
        }
    }
}

/// Simple liveness check
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness check
pub async fn readiness(State(checker): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = checker.check();
    (report.http_status(), Json(report))
}
