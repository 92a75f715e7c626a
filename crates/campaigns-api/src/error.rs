//! API error handling
//!
//! Every failure leaves the service as a JSON body with `success: false`.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campaigns_core::{CampaignError, QueryErrors};
use serde::Serialize;
use tracing::error;

/// Message returned to clients for any internal fault
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Rejected query parameters, reported back verbatim
    InvalidQuery(QueryErrors),
    /// Anything unexpected; details are logged, never returned
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CampaignError> for ApiError {
    fn from(err: CampaignError) -> Self {
        match err {
            CampaignError::InvalidQuery(errors) => ApiError::InvalidQuery(errors),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    errors: Vec<String>,
}

impl ErrorBody {
    fn internal() -> Self {
        Self {
            success: false,
            error: Some("internal_error"),
            errors: vec![INTERNAL_MESSAGE.to_string()],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::InvalidQuery(errors) => ErrorBody {
                success: false,
                error: None,
                errors: errors.into_messages(),
            },
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed with an internal error");
                ErrorBody::internal()
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Turn a handler panic into the generic internal error response
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "Handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
}

pub type ApiResult<T> = Result<T, ApiError>;
