//! Pagination types for API responses
//!
//! Page numbers are 1-indexed. A requested page is always clamped into the
//! available range, so slicing never fails.

use serde::{Deserialize, Serialize};

/// Page used when none is requested
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none (or an invalid one) is requested
pub const DEFAULT_LIMIT: usize = 10;

/// Upper bound applied to a requested page size
pub const MAX_LIMIT: usize = 50;

/// Page size bounds for collection queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryLimits {
    /// Items per page when the client does not supply a usable limit
    pub default_limit: usize,
    /// Largest page size a client may request
    pub max_limit: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl QueryLimits {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit,
            max_limit,
        }
    }

    /// Effective page size for a client-supplied value.
    ///
    /// The cap only applies to a requested value; the default is used as is.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(limit) => limit.min(self.max_limit),
            None => self.default_limit,
        }
    }
}

/// Pagination block of a collection response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Number of items matching the query before pagination
    pub total: usize,
    /// Clamped page number actually returned
    pub page: usize,
    /// Effective page size
    pub limit: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageInfo {
    /// Compute the page layout for `total` items.
    ///
    /// `total_pages` never drops below 1, so an empty result still reports
    /// one (empty) page.
    pub fn new(total: usize, requested_page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit).max(1);
        let page = requested_page.clamp(1, total_pages);

        Self {
            total,
            page,
            limit,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.limit
    }

    /// Index range of this page within a collection of `total` items
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset().min(self.total);
        let end = start.saturating_add(self.limit).min(self.total);
        start..end
    }
}

/// A single page of items with its layout
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub info: PageInfo,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Number of items on this page
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Map the items, keeping the layout
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            info: self.info,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Cut the requested page out of an ordered collection.
pub fn paginate<T>(items: Vec<T>, requested_page: usize, limit: usize) -> Paginated<T> {
    let info = PageInfo::new(items.len(), requested_page, limit);
    let range = info.range();
    let items = items
        .into_iter()
        .skip(range.start)
        .take(range.len())
        .collect();

    Paginated { info, items }
}
