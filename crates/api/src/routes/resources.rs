//! Route definitions for content resources.
//!
//! The same handler set serves both kinds; each router injects its
//! [`ResourceKind`] as an extension, so `/admin/services` and
//! `/admin/support-models` are two mounts of one implementation.

use axum::extract::Extension;
use axum::routing::get;
use axum::Router;

use ecare_core::resource::ResourceKind;

use crate::handlers::{public, resource};
use crate::state::AppState;

/// Admin routes for one resource kind.
///
/// ```text
/// GET    /        -> list_resources
/// POST   /        -> create_resource
/// GET    /{id}    -> get_resource
/// PUT    /{id}    -> update_resource
/// DELETE /{id}    -> delete_resource
/// ```
pub fn admin_router(kind: ResourceKind) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(resource::list_resources).post(resource::create_resource),
        )
        .route(
            "/{id}",
            get(resource::get_resource)
                .put(resource::update_resource)
                .delete(resource::delete_resource),
        )
        .layer(Extension(kind))
}

/// Public read-only routes for one resource kind.
///
/// ```text
/// GET    /         -> list_resources (active only)
/// GET    /{slug}   -> get_by_slug (increments view count)
/// ```
pub fn public_router(kind: ResourceKind) -> Router<AppState> {
    Router::new()
        .route("/", get(public::list_resources))
        .route("/{slug}", get(public::get_by_slug))
        .layer(Extension(kind))
}
