//! Pagination and filter protocol for list-returning operations.
//!
//! List operations take an ordered sequence of `{field, value}` predicates.
//! The reserved `page` field is recognized by every list operation and is
//! always placed first; other field names are passed through to the server,
//! which defines their meaning.

use serde::{Deserialize, Serialize};

/// Reserved filter field for the 1-based page number.
pub const PAGE_FILTER: &str = "page";
/// Restrict question listings to those owned by the caller.
pub const OWNER_FILTER: &str = "owner";
/// Restrict submission listings by judging state.
pub const STATE_FILTER: &str = "state";
/// Restrict submission listings by submitter username.
pub const USERNAME_FILTER: &str = "username";
/// Restrict submission listings by question id.
pub const QUESTION_ID_FILTER: &str = "questionId";

/// A single filter predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

impl Filter {
    /// Create a filter from a field name and value.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The reserved page filter. Page numbers are 1-based; out-of-range
    /// pages are the server's to report, the client does not clamp.
    pub fn page(page: u32) -> Self {
        Self::new(PAGE_FILTER, page.to_string())
    }

    /// Owner-only filter for question listings.
    pub fn owner(owner_only: bool) -> Self {
        Self::new(OWNER_FILTER, owner_only.to_string())
    }

    /// State filter for submission listings.
    pub fn state(state: impl ToString) -> Self {
        Self::new(STATE_FILTER, state.to_string())
    }

    /// Username filter for submission listings.
    pub fn username(username: impl Into<String>) -> Self {
        Self::new(USERNAME_FILTER, username)
    }

    /// Question-id filter for submission listings.
    pub fn question_id(id: impl Into<String>) -> Self {
        Self::new(QUESTION_ID_FILTER, id)
    }
}

/// Build the filter sequence for a page fetch: the page filter first, then
/// any view-specific predicates in their given order.
pub fn page_filters(page: u32, extra: impl IntoIterator<Item = Filter>) -> Vec<Filter> {
    let mut filters = vec![Filter::page(page)];
    filters.extend(extra);
    filters
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    /// Items on this page. Never longer than the server's page size.
    pub items: Vec<T>,
    /// Authoritative total page count, never derived client-side.
    pub total_pages: u64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total_pages: u64) -> Self {
        Self { items, total_pages }
    }
}

/// List-view state that is replaced atomically from one response.
///
/// `items` and `total_pages` always come from the same [`Paged`] value, so
/// a view can never display items against a stale page count.
#[derive(Debug, Clone)]
pub struct PagedList<T> {
    items: Vec<T>,
    total_pages: u64,
    page: u32,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            page: 1,
        }
    }
}

impl<T> PagedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace items, total page count, and current page from one response.
    pub fn apply(&mut self, page: u32, result: Paged<T>) {
        self.items = result.items;
        self.total_pages = result.total_pages;
        self.page = page;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// The 1-based page the current items belong to.
    pub fn page(&self) -> u32 {
        self.page
    }
}
