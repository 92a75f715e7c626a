//! Query validation
//!
//! Turns raw parameters into a `CampaignQuery`. Every parameter is checked
//! before anything is rejected, so a client sees all of its mistakes at once.
//! Messages are recorded in the order niche, platform, status, sort, page,
//! limit.

use campaigns_core::{QueryErrors, QueryLimits, DEFAULT_PAGE};
use campaigns_models::{CampaignStatus, Niche, Platform};

use crate::filters::normalize_term;
use crate::params::{names, CampaignQueryParams};
use crate::query::CampaignQuery;
use crate::sorts::SortKey;

/// A closed set of values accepted for one query parameter
pub trait QueryValue: Sized + Copy + 'static {
    /// Parameter name used in error messages
    const FIELD: &'static str;

    /// Every accepted value, in the order they are listed to clients
    fn allowed() -> &'static [Self];

    /// Wire name of the value
    fn name(&self) -> &'static str;

    /// Exact, case-sensitive lookup
    fn parse(raw: &str) -> Option<Self>;

    /// Accepted values as a comma-separated list
    fn allowed_list() -> String {
        Self::allowed()
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl QueryValue for Niche {
    const FIELD: &'static str = names::NICHE;

    fn allowed() -> &'static [Self] {
        &Niche::ALL
    }

    fn parse(raw: &str) -> Option<Self> {
        Niche::from_str(raw)
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryValue for Platform {
    const FIELD: &'static str = names::PLATFORM;

    fn allowed() -> &'static [Self] {
        &Platform::ALL
    }

    fn parse(raw: &str) -> Option<Self> {
        Platform::from_str(raw)
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryValue for CampaignStatus {
    const FIELD: &'static str = names::STATUS;

    fn allowed() -> &'static [Self] {
        &CampaignStatus::ALL
    }

    fn parse(raw: &str) -> Option<Self> {
        CampaignStatus::from_str(raw)
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl QueryValue for SortKey {
    const FIELD: &'static str = names::SORT;

    fn allowed() -> &'static [Self] {
        &SortKey::ALL
    }

    fn parse(raw: &str) -> Option<Self> {
        SortKey::from_str(raw)
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

/// Validate raw parameters.
///
/// Returns the typed query, or every validation message when at least one
/// parameter is rejected.
pub fn validate(
    params: &CampaignQueryParams,
    limits: &QueryLimits,
) -> Result<CampaignQuery, QueryErrors> {
    let mut errors = QueryErrors::new();

    let niche = choice::<Niche>(params.niche.as_deref(), &mut errors);
    let platform = choice::<Platform>(params.platform.as_deref(), &mut errors);
    let status = choice::<CampaignStatus>(params.status.as_deref(), &mut errors);
    let sort = choice::<SortKey>(params.sort.as_deref(), &mut errors);
    let page = positive_int(names::PAGE, params.page.as_deref(), &mut errors);
    let limit = positive_int(names::LIMIT, params.limit.as_deref(), &mut errors);

    errors.into_result()?;

    Ok(CampaignQuery {
        search: present(params.search.as_deref()).map(normalize_term),
        niche,
        platform,
        status,
        sort: sort.unwrap_or_default(),
        page: page.unwrap_or(DEFAULT_PAGE),
        limit: limits.effective_limit(limit),
    })
}

/// Empty text counts as absent for the enumerated and free-text parameters
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

fn choice<T: QueryValue>(raw: Option<&str>, errors: &mut QueryErrors) -> Option<T> {
    let raw = present(raw)?;
    let value = T::parse(raw);
    if value.is_none() {
        errors.add(format!(
            "Invalid {} \"{}\". Allowed: {}.",
            T::FIELD,
            raw,
            T::allowed_list()
        ));
    }
    value
}

fn positive_int(field: &str, raw: Option<&str>, errors: &mut QueryErrors) -> Option<usize> {
    let raw = raw?;
    let value = parse_positive_int(raw);
    if value.is_none() {
        errors.add(format!(
            "\"{}\" must be a positive integer. Got: \"{}\".",
            field, raw
        ));
    }
    value
}

/// Parse the leading integer of `raw`, accepting only values of at least 1.
///
/// Leading whitespace and a sign are allowed and anything after the digits is
/// ignored, so `"3.5"` reads as 3. Values too large for `usize` saturate.
pub fn parse_positive_int(raw: &str) -> Option<usize> {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });

    match (negative, value) {
        (_, 0) | (true, _) => None,
        (false, value) => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> CampaignQueryParams {
        CampaignQueryParams::from_pairs(pairs.iter().copied())
    }

    fn check(pairs: &[(&str, &str)]) -> Result<CampaignQuery, QueryErrors> {
        validate(&params(pairs), &QueryLimits::default())
    }

    #[test]
    fn test_defaults() {
        let query = check(&[]).unwrap();
        assert_eq!(query, CampaignQuery::default());
    }

    #[test]
    fn test_valid_query() {
        let query = check(&[
            ("search", "  DeFi "),
            ("niche", "Crypto"),
            ("platform", "TikTok"),
            ("status", "active"),
            ("sort", "views_high"),
            ("page", "2"),
            ("limit", "5"),
        ])
        .unwrap();

        assert_eq!(query.search.as_deref(), Some("defi"));
        assert_eq!(query.niche, Some(Niche::Crypto));
        assert_eq!(query.platform, Some(Platform::TikTok));
        assert_eq!(query.status, Some(CampaignStatus::Active));
        assert_eq!(query.sort, SortKey::ViewsHigh);
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 5);
    }

    #[test]
    fn test_invalid_niche_message() {
        let errors = check(&[("niche", "Cooking")]).unwrap_err();
        assert_eq!(
            errors.messages(),
            &["Invalid niche \"Cooking\". Allowed: Crypto, Finance, Tech, Lifestyle, Gaming, Fashion, Health.".to_string()]
        );
    }

    #[test]
    fn test_invalid_enum_messages() {
        let errors = check(&[("platform", "Twitch"), ("status", "Active"), ("sort", "popular")])
            .unwrap_err();

        assert_eq!(
            errors.into_messages(),
            vec![
                "Invalid platform \"Twitch\". Allowed: X, TikTok, Instagram, YouTube.".to_string(),
                "Invalid status \"Active\". Allowed: active, paused, completed.".to_string(),
                "Invalid sort \"popular\". Allowed: newest, oldest, budget_high, budget_low, views_high, views_low.".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_errors_reported_in_field_order() {
        let errors = check(&[
            ("limit", "-1"),
            ("page", "abc"),
            ("sort", "x"),
            ("niche", "y"),
        ])
        .unwrap_err();

        let messages = errors.messages();
        assert_eq!(messages.len(), 4);
        assert!(messages[0].starts_with("Invalid niche"));
        assert!(messages[1].starts_with("Invalid sort"));
        assert_eq!(messages[2], "\"page\" must be a positive integer. Got: \"abc\".");
        assert_eq!(messages[3], "\"limit\" must be a positive integer. Got: \"-1\".");
    }

    #[test]
    fn test_page_zero_cites_literal_value() {
        let errors = check(&[("page", "0")]).unwrap_err();
        assert_eq!(
            errors.messages(),
            &["\"page\" must be a positive integer. Got: \"0\".".to_string()]
        );
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(check(&[("limit", "999")]).unwrap().limit, 50);
        assert_eq!(check(&[("limit", "50")]).unwrap().limit, 50);
        assert_eq!(check(&[("limit", "1")]).unwrap().limit, 1);
    }

    #[test]
    fn test_cap_only_applies_to_requested_limit() {
        let limits = QueryLimits::new(30, 20);
        assert_eq!(validate(&params(&[]), &limits).unwrap().limit, 30);
        assert_eq!(validate(&params(&[("limit", "25")]), &limits).unwrap().limit, 20);
    }

    #[test]
    fn test_empty_values() {
        let query = check(&[("niche", ""), ("sort", ""), ("search", "")]).unwrap();
        assert!(query.niche.is_none());
        assert!(query.search.is_none());
        assert_eq!(query.sort, SortKey::Newest);

        let errors = check(&[("page", "")]).unwrap_err();
        assert_eq!(
            errors.messages(),
            &["\"page\" must be a positive integer. Got: \"\".".to_string()]
        );
    }

    #[test]
    fn test_whitespace_search_becomes_empty_term() {
        let query = check(&[("search", "   ")]).unwrap();
        assert_eq!(query.search.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_positive_int() {
        assert_eq!(parse_positive_int("3"), Some(3));
        assert_eq!(parse_positive_int(" 7"), Some(7));
        assert_eq!(parse_positive_int("+4"), Some(4));
        assert_eq!(parse_positive_int("3.9"), Some(3));
        assert_eq!(parse_positive_int("5abc"), Some(5));
        assert_eq!(parse_positive_int("99999999999999999999999"), Some(usize::MAX));
        assert_eq!(parse_positive_int("0"), None);
        assert_eq!(parse_positive_int("-2"), None);
        assert_eq!(parse_positive_int("-0"), None);
        assert_eq!(parse_positive_int("abc"), None);
        assert_eq!(parse_positive_int(""), None);
        assert_eq!(parse_positive_int("-"), None);
    }

    #[test]
    fn test_allowed_lists() {
        assert_eq!(Platform::allowed_list(), "X, TikTok, Instagram, YouTube");
        assert_eq!(CampaignStatus::allowed_list(), "active, paused, completed");
        assert_eq!(<SortKey as QueryValue>::parse("oldest"), Some(SortKey::Oldest));
    }

    #[test]
    fn test_parse_accepts_every_listed_value() {
        for niche in Niche::allowed() {
            assert_eq!(<Niche as QueryValue>::parse(niche.name()), Some(*niche));
        }
        for key in SortKey::allowed() {
            assert_eq!(<SortKey as QueryValue>::parse(key.name()), Some(*key));
        }
        assert_eq!(<Platform as QueryValue>::parse("tiktok"), None);
        assert_eq!(<CampaignStatus as QueryValue>::parse("Active"), None);
    }
}
