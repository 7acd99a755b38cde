//! Offset pagination for listing queries.

use super::ListingDomainError;
use serde::Serialize;

/// Number of listings shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`ListingDomainError::InvalidPageSize`] when `page_size` is zero
    /// or larger than [`MAX_PAGE_SIZE`].
    pub const fn new(page: u32, page_size: u32) -> Result<Self, ListingDomainError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ListingDomainError::InvalidPageSize {
                max: MAX_PAGE_SIZE,
                actual: page_size,
            });
        }
        Ok(Self { page, page_size })
    }

    /// Returns the first page with the default page size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Returns the number of rows to skip.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page as u64) * (self.page_size as u64)
    }

    /// Returns the number of rows adapters fetch: one more than the page size
    /// so that [`Page::has_more`] can be answered exactly.
    #[must_use]
    pub const fn probe_limit(self) -> u64 {
        self.page_size as u64 + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page, newest first.
    pub items: Vec<T>,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Whether another page with at least one item exists.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Builds a page from up to `page_size + 1` probed rows.
    ///
    /// The extra row, if present, is dropped and signals `has_more`.
    #[must_use]
    pub fn from_probe(mut rows: Vec<T>, request: PageRequest) -> Self {
        let page_size = usize::try_from(request.page_size()).unwrap_or(usize::MAX);
        let has_more = rows.len() > page_size;
        rows.truncate(page_size);
        Self {
            items: rows,
            page: request.page(),
            page_size: request.page_size(),
            has_more,
        }
    }

    /// Maps the items of this page, preserving pagination metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            has_more: self.has_more,
        }
    }
}
