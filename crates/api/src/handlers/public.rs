//! Public read-only handlers for content resources.
//!
//! No authentication: these back the marketing site. Only active,
//! non-deleted resources are visible.

use axum::extract::{Extension, Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use ecare_core::pagination::paginate;
use ecare_core::resource::ResourceKind;
use ecare_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Default page size for public listings.
const DEFAULT_PUBLIC_LIMIT: i64 = 20;

/// GET /api/v1/{services|support-models}
///
/// List active resources for the public site.
pub async fn list_resources(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (page, limit) = params.resolve(DEFAULT_PUBLIC_LIMIT);

    let total = ResourceRepo::count_public(&state.pool, kind).await?;
    let page_info = paginate(page, limit, total);
    let items =
        ResourceRepo::list_public(&state.pool, kind, page_info.skip, page_info.limit).await?;

    Ok(Json(PaginatedResponse::new(items, page, total, page_info)))
}

/// GET /api/v1/{kind}/{slug}
///
/// Fetch one active resource by its public slug. Each fetch counts as a
/// view; the returned body reflects the count before this fetch.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let resource = ResourceRepo::find_active_by_slug(&state.pool, kind, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", kind.label())))?;

    ResourceRepo::increment_view_count(&state.pool, kind, resource.id).await?;

    Ok(Json(DataResponse::new(resource)))
}
