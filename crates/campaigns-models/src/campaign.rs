//! Campaign model
//!
//! A campaign is a promotional listing published by a brand, targeted at one
//! niche and running on one or more social platforms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

/// Campaign identifier
pub type CampaignId = u64;

/// Campaign entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 255))]
    pub brand: String,

    /// Free-form tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,

    pub niche: Niche,

    /// Platforms the campaign runs on
    pub platforms: Vec<Platform>,

    pub status: CampaignStatus,

    /// Budget in the listing currency
    #[validate(range(min = 0.0))]
    #[serde(serialize_with = "serialize_budget")]
    pub budget: f64,

    pub views: u64,

    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Check whether the campaign runs on a platform
    pub fn runs_on(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Case-insensitive substring match against title, brand and tags.
    ///
    /// `term` must already be lower-cased.
    pub fn matches_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.brand.to_lowercase().contains(term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(term))
    }
}

/// Audience niche of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Niche {
    Crypto,
    Finance,
    Tech,
    Lifestyle,
    Gaming,
    Fashion,
    Health,
}

impl Niche {
    /// All niches, in their canonical order
    pub const ALL: [Niche; 7] = [
        Niche::Crypto,
        Niche::Finance,
        Niche::Tech,
        Niche::Lifestyle,
        Niche::Gaming,
        Niche::Fashion,
        Niche::Health,
    ];

    /// Parse from the exact (case-sensitive) wire name
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|niche| niche.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Niche::Crypto => "Crypto",
            Niche::Finance => "Finance",
            Niche::Tech => "Tech",
            Niche::Lifestyle => "Lifestyle",
            Niche::Gaming => "Gaming",
            Niche::Fashion => "Fashion",
            Niche::Health => "Health",
        }
    }
}

/// Social platform a campaign is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    X,
    TikTok,
    Instagram,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::X,
        Platform::TikTok,
        Platform::Instagram,
        Platform::YouTube,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X => "X",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
        }
    }
}

/// Lifecycle state of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

/// Whole budgets go out as JSON integers (`12000`, not `12000.0`)
fn serialize_budget<S>(budget: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if budget.fract() == 0.0 && budget.abs() <= MAX_EXACT {
        serializer.serialize_i64(*budget as i64)
    } else {
        serializer.serialize_f64(*budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Campaign {
        Campaign {
            id: 1,
            title: "Summer Yield Drop".to_string(),
            brand: "Ledgerly".to_string(),
            tags: vec!["DeFi".to_string(), "Staking".to_string()],
            niche: Niche::Crypto,
            platforms: vec![Platform::X, Platform::YouTube],
            status: CampaignStatus::Active,
            budget: 2500.0,
            views: 48_000,
            created_at: "2024-06-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_enum_parsing_is_exact() {
        assert_eq!(Niche::from_str("Crypto"), Some(Niche::Crypto));
        assert_eq!(Niche::from_str("crypto"), None);
        assert_eq!(Platform::from_str("YouTube"), Some(Platform::YouTube));
        assert_eq!(Platform::from_str("Youtube"), None);
        assert_eq!(CampaignStatus::from_str("paused"), Some(CampaignStatus::Paused));
        assert_eq!(CampaignStatus::from_str("Paused"), None);
    }

    #[test]
    fn test_as_str_round_trips_all_variants() {
        for niche in Niche::ALL {
            assert_eq!(Niche::from_str(niche.as_str()), Some(niche));
        }
        for platform in Platform::ALL {
            assert_eq!(Platform::from_str(platform.as_str()), Some(platform));
        }
        for status in CampaignStatus::ALL {
            assert_eq!(CampaignStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_matches_term() {
        let campaign = sample();
        assert!(campaign.matches_term("defi"));
        assert!(campaign.matches_term("ledger"));
        assert!(campaign.matches_term("yield"));
        assert!(campaign.matches_term(""));
        assert!(!campaign.matches_term("fashion"));
    }

    #[test]
    fn test_runs_on() {
        let campaign = sample();
        assert!(campaign.runs_on(Platform::X));
        assert!(!campaign.runs_on(Platform::TikTok));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["niche"], "Crypto");
        assert_eq!(json["status"], "active");
        assert_eq!(json["platforms"][1], "YouTube");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_whole_budgets_serialize_as_integers() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"budget\":2500,"));

        let mut fractional = sample();
        fractional.budget = 2500.5;
        let json = serde_json::to_value(&fractional).unwrap();
        assert_eq!(json["budget"], 2500.5);

        let parsed: Campaign = serde_json::from_str(&json.to_string()).unwrap();
        assert_eq!(parsed.budget, 2500.5);
    }

    #[test]
    fn test_validation() {
        assert!(sample().validate().is_ok());

        let mut invalid = sample();
        invalid.title.clear();
        invalid.budget = -1.0;
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("budget"));
    }
}
