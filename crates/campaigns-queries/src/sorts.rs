//! Query Sort Orders
//!
//! Every ordering compares a single attribute. Sorting is stable, so
//! campaigns that compare equal keep their relative input order.

use std::cmp::Ordering;

use campaigns_models::Campaign;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (1-9, oldest first)
    #[default]
    Asc,
    /// Descending order (9-1, newest first)
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Attribute a sort key orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAttribute {
    CreatedAt,
    Budget,
    Views,
}

/// Supported campaign orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    BudgetHigh,
    BudgetLow,
    ViewsHigh,
    ViewsLow,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::BudgetHigh,
        SortKey::BudgetLow,
        SortKey::ViewsHigh,
        SortKey::ViewsLow,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::BudgetHigh => "budget_high",
            SortKey::BudgetLow => "budget_low",
            SortKey::ViewsHigh => "views_high",
            SortKey::ViewsLow => "views_low",
        }
    }

    pub fn attribute(&self) -> SortAttribute {
        match self {
            SortKey::Newest | SortKey::Oldest => SortAttribute::CreatedAt,
            SortKey::BudgetHigh | SortKey::BudgetLow => SortAttribute::Budget,
            SortKey::ViewsHigh | SortKey::ViewsLow => SortAttribute::Views,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortKey::Oldest | SortKey::BudgetLow | SortKey::ViewsLow => SortDirection::Asc,
            SortKey::Newest | SortKey::BudgetHigh | SortKey::ViewsHigh => SortDirection::Desc,
        }
    }

    /// Compare two campaigns under this ordering
    pub fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        let ascending = match self.attribute() {
            SortAttribute::CreatedAt => a.created_at.cmp(&b.created_at),
            // Numeric equality, so 0.0 and -0.0 tie; budgets never hold NaN
            SortAttribute::Budget => a.budget.partial_cmp(&b.budget).unwrap_or(Ordering::Equal),
            SortAttribute::Views => a.views.cmp(&b.views),
        };
        self.direction().apply(ascending)
    }

    /// Stable in-place sort
    pub fn sort(&self, campaigns: &mut [&Campaign]) {
        campaigns.sort_by(|a, b| self.compare(a, b));
    }
}
