//! Route definitions for site-wide settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/admin/settings`.
///
/// ```text
/// GET /    -> get_settings
/// PUT /    -> save_settings
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(settings::get_settings).put(settings::save_settings),
    )
}

/// Routes mounted at `/settings`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(settings::get_public_settings))
}
