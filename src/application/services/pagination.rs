//! Pagination bounds calculation for listing endpoints

use crate::support::{
    PageQuery, PaginatedResponse, PaginationConfig, PaginationRequest, PaginationResult,
};

/// Turns whatever a client asked for into page bounds the data store can
/// serve. Never fails: bad input is normalized, at worst into an empty page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationValidator {
    config: PaginationConfig,
}

impl PaginationValidator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Compute a safe `(size, offset)` pair.
    ///
    /// Size is clamped to `[1, min(max_page_size, total_records)]`, then
    /// shrunk to the records left after `offset`. An offset at or past the
    /// end gives a zero-sized page with the offset left as requested.
    pub fn validate(
        &self,
        requested_size: Option<i64>,
        requested_offset: Option<i64>,
        total_records: i64,
    ) -> PaginationResult {
        if total_records <= 0 {
            return PaginationResult::EMPTY;
        }

        let upper_bound = i64::from(self.config.max_page_size()).min(total_records);
        let size = requested_size
            .unwrap_or_else(|| i64::from(self.config.default_page_size()))
            .clamp(1, upper_bound);
        let offset = requested_offset.unwrap_or(0).max(0);

        // total_records > 0 and offset >= 0, so this cannot overflow
        let remaining = total_records - offset;
        let size = size.min(remaining).max(0);

        PaginationResult {
            size: size as u64,
            offset: offset as u64,
        }
    }

    pub fn validate_request(&self, request: &PaginationRequest) -> PaginationResult {
        self.validate(
            request.requested_size,
            request.requested_offset,
            request.total_records,
        )
    }

    pub fn validate_query(&self, query: &PageQuery, total_records: i64) -> PaginationResult {
        self.validate_request(&query.into_request(total_records))
    }

    /// Page through an in-memory collection.
    pub fn paginate<T: Clone>(&self, items: &[T], query: &PageQuery) -> PaginatedResponse<T> {
        let total = items.len() as u64;
        let total_records = i64::try_from(items.len()).unwrap_or(i64::MAX);
        let page = self.validate_query(query, total_records);

        if page.is_empty() {
            return PaginatedResponse::new(Vec::new(), total, &page);
        }

        let start = page.offset as usize;
        let end = start + page.size as usize;
        let slice = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

        PaginatedResponse::new(slice, total, &page)
    }
}
