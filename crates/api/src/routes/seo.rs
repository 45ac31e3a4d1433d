//! Route definitions for per-page SEO metadata.

use axum::routing::get;
use axum::Router;

use crate::handlers::seo;
use crate::state::AppState;

/// Routes mounted at `/admin/seo`.
///
/// ```text
/// GET /    -> list_seo_pages
/// PUT /    -> save_seo_page (upsert by page_key)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", get(seo::list_seo_pages).put(seo::save_seo_page))
}

/// Routes mounted at `/seo`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(seo::list_public_seo_pages))
}
