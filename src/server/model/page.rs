//! Pagination request and result models shared by paginated listings.

use crate::model::api::PaginationDto;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page number served. Keeps `page * limit` far from `u64` overflow in the paginator.
pub const MAX_PAGE: u64 = 10_000;

/// 1-based page request with a bounded page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Builds a page request from optional query values, clamping out-of-range values.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).clamp(1, MAX_PAGE),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the totals needed to render pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn pagination_dto(&self) -> PaginationDto {
        PaginationDto {
            page: self.request.page,
            limit: self.request.limit,
            total_count: self.total_items,
            total_pages: self.total_pages,
            has_next_page: self.request.page < self.total_pages,
            has_previous_page: self.request.page > 1,
        }
    }
}
