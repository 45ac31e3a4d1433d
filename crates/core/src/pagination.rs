//! Pagination arithmetic shared by all list endpoints.

/// Offset/limit plus page metadata derived from `(page, limit, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip: `(page - 1) * limit`.
    pub skip: i64,
    /// Rows per page, passed through unchanged.
    pub limit: i64,
    /// `ceil(total / limit)`; 0 when the collection is empty.
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Compute skip/limit and page metadata for a listing.
///
/// Expects `page >= 1`, `limit >= 1`, `total >= 0` (handlers clamp query
/// parameters before calling). No upper clamp is applied to `page`: an
/// out-of-range page yields an empty result set from the repository, not
/// an error.
pub fn paginate(page: i64, limit: i64, total: i64) -> Page {
    Page {
        skip: (page - 1) * limit,
        limit,
        total_pages: (total + limit - 1) / limit,
        has_next_page: page * limit < total,
        has_prev_page: page > 1,
    }
}
