//! Raw query parameters
//!
//! Parameters arrive as untyped text straight from the request. Nothing is
//! validated here; see `validation`.

/// Untyped listing parameters, as supplied by the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignQueryParams {
    pub search: Option<String>,
    pub niche: Option<String>,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Recognised parameter names
pub mod names {
    pub const SEARCH: &str = "search";
    pub const NICHE: &str = "niche";
    pub const PLATFORM: &str = "platform";
    pub const STATUS: &str = "status";
    pub const SORT: &str = "sort";
    pub const PAGE: &str = "page";
    pub const LIMIT: &str = "limit";
}

impl CampaignQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect parameters from decoded key/value pairs.
    ///
    /// Unknown keys are ignored. A key supplied more than once keeps all of
    /// its values joined with `","`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            if let Some(slot) = params.slot_mut(key.as_ref()) {
                let value = value.into();
                *slot = Some(match slot.take() {
                    Some(existing) => format!("{},{}", existing, value),
                    None => value,
                });
            }
        }
        params
    }

    /// Set a single parameter (builder pattern)
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        if let Some(slot) = self.slot_mut(key) {
            *slot = Some(value.into());
        }
        self
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            names::SEARCH => Some(&mut self.search),
            names::NICHE => Some(&mut self.niche),
            names::PLATFORM => Some(&mut self.platform),
            names::STATUS => Some(&mut self.status),
            names::SORT => Some(&mut self.sort),
            names::PAGE => Some(&mut self.page),
            names::LIMIT => Some(&mut self.limit),
            _ => None,
        }
    }
}
