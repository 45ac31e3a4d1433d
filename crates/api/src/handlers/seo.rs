//! Handlers for per-page SEO metadata (keyed upsert).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use ecare_core::error::CoreError;
use ecare_db::models::seo_page::SaveSeoPage;
use ecare_db::repositories::SeoPageRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/seo
pub async fn list_seo_pages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pages = SeoPageRepo::list(&state.pool).await?;

    Ok(Json(DataResponse::new(pages)))
}

/// GET /api/v1/seo
///
/// Public mirror, read by the site's head-tag rendering.
pub async fn list_public_seo_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = SeoPageRepo::list(&state.pool).await?;

    Ok(Json(DataResponse::new(pages)))
}

/// PUT /api/v1/admin/seo
///
/// Create or overwrite one page's SEO metadata, keyed by `page_key`.
pub async fn save_seo_page(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SaveSeoPage>,
) -> AppResult<impl IntoResponse> {
    for (name, value) in [
        ("page_key", &input.page_key),
        ("page_name", &input.page_name),
        ("title", &input.title),
        ("description", &input.description),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{name} is required and cannot be empty"
            ))
            .into());
        }
    }

    let page = SeoPageRepo::upsert(&state.pool, &input).await?;

    tracing::info!(page_key = %page.page_key, user_id = admin.user_id, "SEO metadata saved",);

    Ok(Json(DataResponse::new(page)))
}
