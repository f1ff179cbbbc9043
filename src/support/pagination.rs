//! Pagination types shared by every listing.

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Page size limits, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationConfig {
    default_page_size: u32,
    max_page_size: u32,
}

impl PaginationConfig {
    /// Both sizes must be positive and `max_page_size >= default_page_size`.
    pub fn new(default_page_size: u32, max_page_size: u32) -> Result<Self, ConfigError> {
        if default_page_size == 0 || max_page_size == 0 {
            return Err(ConfigError::Invalid(
                "page sizes must be positive".to_string(),
            ));
        }
        if max_page_size < default_page_size {
            return Err(ConfigError::Invalid(format!(
                "max_page_size ({}) is smaller than default_page_size ({})",
                max_page_size, default_page_size
            )));
        }
        Ok(Self {
            default_page_size,
            max_page_size,
        })
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 50,
        }
    }
}

/// Raw pagination input for a single call.
///
/// Values are signed so that anything a client sends can be normalized
/// instead of rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationRequest {
    pub requested_size: Option<i64>,
    pub requested_offset: Option<i64>,
    pub total_records: i64,
}

impl PaginationRequest {
    pub fn new(total_records: i64) -> Self {
        Self {
            requested_size: None,
            requested_offset: None,
            total_records,
        }
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.requested_size = Some(size);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.requested_offset = Some(offset);
        self
    }
}

/// Sanitized page bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult {
    pub size: u64,
    pub offset: u64,
}

impl PaginationResult {
    pub const EMPTY: PaginationResult = PaginationResult { size: 0, offset: 0 };

    /// A zero-sized page; not an error.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Pagination query parameters as a listing endpoint receives them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Requested page size. Falls back to the configured default.
    #[serde(default)]
    pub limit: Option<i64>,
    /// Records to skip. Missing or negative means 0.
    #[serde(default)]
    pub offset: Option<i64>,
}

impl PageQuery {
    pub fn into_request(self, total_records: i64) -> PaginationRequest {
        PaginationRequest {
            requested_size: self.limit,
            requested_offset: self.offset,
            total_records,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub offset: u64,
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: &PaginationResult) -> Self {
        let has_more = page.offset.saturating_add(page.size) < total;
        Self {
            items,
            total,
            size: page.size,
            offset: page.offset,
            has_more,
        }
    }

    pub fn empty(total: u64) -> Self {
        Self::new(Vec::new(), total, &PaginationResult::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_sizes() {
        assert!(PaginationConfig::new(0, 50).is_err());
        assert!(PaginationConfig::new(20, 0).is_err());
    }

    #[test]
    fn config_rejects_max_below_default() {
        let err = PaginationConfig::new(30, 10).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn config_accepts_equal_sizes() {
        let cfg = PaginationConfig::new(25, 25).unwrap();
        assert_eq!(cfg.default_page_size(), 25);
        assert_eq!(cfg.max_page_size(), 25);
    }

    #[test]
    fn page_query_deserializes_missing_fields() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q, PageQuery::default());

        let q: PageQuery = serde_json::from_str(r#"{"limit": 10, "offset": -3}"#).unwrap();
        assert_eq!(q.limit, Some(10));
        assert_eq!(q.offset, Some(-3));
    }

    #[test]
    fn response_reports_remaining_records() {
        let page = PaginationResult { size: 5, offset: 0 };
        let resp = PaginatedResponse::new(vec![1, 2, 3, 4, 5], 12, &page);
        assert!(resp.has_more);

        let last = PaginationResult { size: 2, offset: 10 };
        let resp = PaginatedResponse::new(vec![11, 12], 12, &last);
        assert!(!resp.has_more);
    }

    #[test]
    fn response_serializes_snake_case() {
        let resp: PaginatedResponse<u32> = PaginatedResponse::empty(0);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["has_more"], false);
        assert_eq!(json["items"], serde_json::json!([]));
    }
}
