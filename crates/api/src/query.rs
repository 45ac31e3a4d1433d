//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`) for list endpoints.
///
/// Missing values fall back to the caller-supplied defaults; out-of-range
/// values are clamped. A page past the end of the collection is not an
/// error -- it yields an empty result set.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Largest page size any listing will serve.
const MAX_LIMIT: i64 = 100;

impl PaginationParams {
    /// Resolve to a concrete `(page, limit)` pair.
    pub fn resolve(&self, default_limit: i64) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(default_limit).clamp(1, MAX_LIMIT);
        (page, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let params = PaginationParams {
            page: None,
            limit: None,
        };
        assert_eq!(params.resolve(10), (1, 10));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let params = PaginationParams {
            page: Some(0),
            limit: Some(10_000),
        };
        assert_eq!(params.resolve(10), (1, MAX_LIMIT));
    }
}
