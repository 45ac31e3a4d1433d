//! Route definitions for page banners.

use axum::routing::get;
use axum::Router;

use crate::handlers::banner;
use crate::state::AppState;

/// Routes mounted at `/admin/banners`.
///
/// ```text
/// GET    /        -> list_banners
/// POST   /        -> create_banner
/// PUT    /{id}    -> update_banner
/// DELETE /{id}    -> delete_banner
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner::list_banners).post(banner::create_banner))
        .route(
            "/{id}",
            axum::routing::put(banner::update_banner).delete(banner::delete_banner),
        )
}

/// Routes mounted at `/banners`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{page_key}", get(banner::get_public_banner))
}
