//! Route definitions for contact information.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/admin/contact`.
///
/// ```text
/// GET /    -> get_contact
/// PUT /    -> save_contact
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", get(contact::get_contact).put(contact::save_contact))
}

/// Routes mounted at `/contact`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(contact::get_public_contact))
}
