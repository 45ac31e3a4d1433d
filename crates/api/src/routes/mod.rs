//! Route definitions.

pub mod banners;
pub mod contact;
pub mod health;
pub mod resources;
pub mod seo;
pub mod settings;

use axum::Router;

use ecare_core::resource::ResourceKind;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/services                    list, create (admin only)
/// /admin/services/{id}               get, update, delete
/// /admin/support-models              list, create
/// /admin/support-models/{id}         get, update, delete
/// /admin/banners                     list, create
/// /admin/banners/{id}                update, delete
/// /admin/contact                     get, save
/// /admin/seo                         list, save
/// /admin/settings                    get, save
///
/// /services                          public listing (active only)
/// /services/{slug}                   public detail (+1 view)
/// /support-models                    public listing
/// /support-models/{slug}             public detail (+1 view)
/// /banners/{page_key}                public active banner
/// /contact                           public contact info
/// /seo                               public SEO metadata
/// /settings                          public site settings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin panel (JWT + admin role).
        .nest(
            "/admin/services",
            resources::admin_router(ResourceKind::Service),
        )
        .nest(
            "/admin/support-models",
            resources::admin_router(ResourceKind::SupportModel),
        )
        .nest("/admin/banners", banners::admin_router())
        .nest("/admin/contact", contact::admin_router())
        .nest("/admin/seo", seo::admin_router())
        .nest("/admin/settings", settings::admin_router())
        // Public marketing site (no auth).
        .nest("/services", resources::public_router(ResourceKind::Service))
        .nest(
            "/support-models",
            resources::public_router(ResourceKind::SupportModel),
        )
        .nest("/banners", banners::public_router())
        .nest("/contact", contact::public_router())
        .nest("/seo", seo::public_router())
        .nest("/settings", settings::public_router())
}
