//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "success": true, "data": ... }` envelope
//! (listings add a `"pagination"` object). Use these structs instead of
//! ad-hoc `serde_json::json!` to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

use ecare_core::pagination::Page;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": ... }` envelope for operations with no
/// payload (deletes).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Listing envelope: `{ "success": true, "data": [...], "pagination": {...} }`.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, current_page: i64, total_items: i64, page: Page) -> Self {
        Self {
            success: true,
            data,
            pagination: PageMeta {
                current_page,
                total_pages: page.total_pages,
                total_items,
                limit: page.limit,
                has_next_page: page.has_next_page,
                has_prev_page: page.has_prev_page,
            },
        }
    }
}

/// Page metadata included in every listing response.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub limit: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}
