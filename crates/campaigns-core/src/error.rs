//! Core error types for the Campaigns API

use thiserror::Error;

/// Standard Result type for campaign operations
pub type CoreResult<T> = Result<T, CampaignError>;

/// Core error type for all campaign operations
#[derive(Error, Debug)]
pub enum CampaignError {
    /// One or more query parameters were rejected
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryErrors),

    /// The campaign dataset could not be loaded or read
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampaignError {
    pub fn data_source(message: impl Into<String>) -> Self {
        CampaignError::DataSource(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CampaignError::Internal(message.into())
    }

    /// HTTP status code mapping
    pub fn status_code(&self) -> u16 {
        match self {
            CampaignError::InvalidQuery(_) => 400,
            CampaignError::DataSource(_) | CampaignError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CampaignError::InvalidQuery(_) => "invalid_query",
            CampaignError::DataSource(_) => "data_source_error",
            CampaignError::Internal(_) => "internal_error",
        }
    }
}

/// Ordered collection of query validation messages.
///
/// Messages keep the order in which they were recorded so that callers see
/// every rejected parameter in a predictable sequence.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("{}", .messages.join(" "))]
pub struct QueryErrors {
    messages: Vec<String>,
}

impl QueryErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Turn the collection into a `Result`, failing when anything was recorded
    pub fn into_result(self) -> Result<(), QueryErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<String>> for QueryErrors {
    fn from(messages: Vec<String>) -> Self {
        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_errors_keep_order() {
        let mut errors = QueryErrors::new();
        errors.add("first");
        errors.add("second");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages(), &["first".to_string(), "second".to_string()]);
        assert_eq!(errors.to_string(), "first second");
    }

    #[test]
    fn test_into_result() {
        assert!(QueryErrors::new().into_result().is_ok());

        let errors = QueryErrors::from(vec!["bad".to_string()]);
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.into_messages(), vec!["bad".to_string()]);
    }

    #[test]
    fn test_status_codes() {
        let invalid = CampaignError::from(QueryErrors::from(vec!["bad".to_string()]));
        assert_eq!(invalid.status_code(), 400);
        assert_eq!(invalid.error_code(), "invalid_query");

        let internal = CampaignError::internal("boom");
        assert_eq!(internal.status_code(), 500);
        assert_eq!(internal.error_code(), "internal_error");
        assert_eq!(CampaignError::data_source("gone").status_code(), 500);
    }
}
