//! Admin handlers for content resources (services and support models).
//!
//! One handler set serves both kinds; the mounting router injects the
//! [`ResourceKind`] via `Extension`. All endpoints require the admin role.
//!
//! Create and update accept multipart forms. The form is parsed into a
//! typed input struct at the boundary; field-level parse failures (bad
//! `order`, malformed `features` JSON, unknown `status`) surface as 400s
//! before any upload or database work.

use axum::extract::{Extension, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use ecare_core::error::CoreError;
use ecare_core::pagination::paginate;
use ecare_core::resource::ResourceKind;
use ecare_core::types::DbId;
use ecare_db::models::resource::ResourceStatus;
use ecare_db::repositories::ResourceRepo;

use super::forms::{read_file, read_text};
use crate::error::{AppError, AppResult};
use crate::lifecycle::{
    CreateResourceInput, ResourceLifecycle, UpdateResourceInput, UploadedFile,
};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::{DataResponse, MessageResponse, PaginatedResponse};
use crate::state::AppState;

/// Default page size for the admin listing.
const DEFAULT_ADMIN_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Query parameters for the admin listing (`?page=&limit=&status=`).
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// GET /api/v1/admin/{services|support-models}
///
/// List resources for the admin panel, optionally filtered by status.
pub async fn list_resources(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let status = match params.status.as_deref() {
        None | Some("") => None,
        Some(s) => Some(
            ResourceStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid status filter '{s}'")))?,
        ),
    };

    let (page, limit) = PaginationParams {
        page: params.page,
        limit: params.limit,
    }
    .resolve(DEFAULT_ADMIN_LIMIT);

    let total = ResourceRepo::count(&state.pool, kind, status).await?;
    let page_info = paginate(page, limit, total);
    let items =
        ResourceRepo::list(&state.pool, kind, status, page_info.skip, page_info.limit).await?;

    Ok(Json(PaginatedResponse::new(items, page, total, page_info)))
}

/// GET /api/v1/admin/{kind}/{id}
pub async fn get_resource(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resource = ResourceRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))?;

    Ok(Json(DataResponse::new(resource)))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/{kind}
///
/// Create a resource from a multipart form. The cover image is mandatory.
pub async fn create_resource(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let input = read_form(multipart).await?.into_create_input()?;

    let resource = ResourceLifecycle::new(&state.pool, state.assets.as_ref(), kind)
        .create(input)
        .await?;

    tracing::info!(
        resource_id = resource.id,
        kind = kind.entity(),
        slug = %resource.slug,
        user_id = admin.user_id,
        "Resource created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(resource))))
}

/// PUT /api/v1/admin/{kind}/{id}
///
/// Overwrite a resource from a multipart form. Gallery URLs absent from
/// `existingGallery[...]` are dropped; a missing cover file keeps the
/// stored cover.
pub async fn update_resource(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let input = read_form(multipart).await?.into_update_input()?;

    let resource = ResourceLifecycle::new(&state.pool, state.assets.as_ref(), kind)
        .update(id, input)
        .await?;

    tracing::info!(
        resource_id = id,
        kind = kind.entity(),
        slug = %resource.slug,
        user_id = admin.user_id,
        "Resource updated",
    );

    Ok(Json(DataResponse::new(resource)))
}

/// DELETE /api/v1/admin/{kind}/{id}
pub async fn delete_resource(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ResourceLifecycle::new(&state.pool, state.assets.as_ref(), kind)
        .delete(id)
        .await?;

    tracing::info!(
        resource_id = id,
        kind = kind.entity(),
        user_id = admin.user_id,
        "Resource deleted",
    );

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        kind.label()
    ))))
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Raw multipart fields of the admin create/update form.
///
/// Field names are the admin UI's contract and stay camelCase; everything
/// downstream of the parser is typed.
#[derive(Debug, Default)]
struct ResourceForm {
    name: Option<String>,
    short_description: Option<String>,
    description: Option<String>,
    status: Option<String>,
    order: Option<String>,
    features: Option<String>,
    seo_title: Option<String>,
    seo_description: Option<String>,
    seo_keywords: Option<String>,
    cover_image: Option<UploadedFile>,
    gallery_images: Vec<UploadedFile>,
    existing_image: Option<String>,
    existing_gallery: Vec<String>,
}

/// Drain a multipart request into a [`ResourceForm`].
///
/// Unknown fields are ignored. File fields with empty bodies are skipped:
/// browsers submit an empty part for file inputs the user left blank.
async fn read_form(mut multipart: Multipart) -> AppResult<ResourceForm> {
    let mut form = ResourceForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => form.name = Some(read_text(field).await?),
            "shortDescription" => form.short_description = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "status" => form.status = Some(read_text(field).await?),
            "order" => form.order = Some(read_text(field).await?),
            "features" => form.features = Some(read_text(field).await?),
            "seoTitle" => form.seo_title = Some(read_text(field).await?),
            "seoDescription" => form.seo_description = Some(read_text(field).await?),
            "seoKeywords" => form.seo_keywords = Some(read_text(field).await?),
            "image" => {
                if let Some(file) = read_file(field).await? {
                    form.cover_image = Some(file);
                }
            }
            "galleryImages" => {
                if let Some(file) = read_file(field).await? {
                    form.gallery_images.push(file);
                }
            }
            "existingImage" => form.existing_image = Some(read_text(field).await?),
            n if n.starts_with("existingGallery[") => {
                let url = read_text(field).await?;
                if !url.is_empty() {
                    form.existing_gallery.push(url);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

impl ResourceForm {
    fn parse_status(&self) -> AppResult<ResourceStatus> {
        match self.status.as_deref() {
            // Schema default.
            None | Some("") => Ok(ResourceStatus::Active),
            Some(s) => ResourceStatus::parse(s).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!("Invalid status '{s}'")))
            }),
        }
    }

    fn parse_sort_order(&self) -> AppResult<i32> {
        match self.order.as_deref() {
            None | Some("") => Ok(0),
            Some(s) => s.parse().map_err(|_| {
                AppError::Core(CoreError::Validation(format!(
                    "Order must be an integer, got '{s}'"
                )))
            }),
        }
    }

    /// `features` arrives as a JSON array string (`["a","b"]`).
    fn parse_features(&self) -> AppResult<Vec<String>> {
        match self.features.as_deref() {
            None | Some("") => Ok(vec![]),
            Some(s) => serde_json::from_str(s).map_err(|_| {
                AppError::Core(CoreError::Validation(
                    "Features must be a JSON array of strings".into(),
                ))
            }),
        }
    }

    fn into_create_input(self) -> AppResult<CreateResourceInput> {
        let status = self.parse_status()?;
        let sort_order = self.parse_sort_order()?;
        let features = self.parse_features()?;

        Ok(CreateResourceInput {
            name: self.name.unwrap_or_default(),
            short_description: self.short_description.filter(|s| !s.trim().is_empty()),
            description: self.description.unwrap_or_default(),
            status,
            sort_order,
            features,
            seo_title: self.seo_title.filter(|s| !s.trim().is_empty()),
            seo_description: self.seo_description.filter(|s| !s.trim().is_empty()),
            seo_keywords: self.seo_keywords.filter(|s| !s.trim().is_empty()),
            cover_image: self.cover_image,
            gallery_images: self.gallery_images,
        })
    }

    fn into_update_input(self) -> AppResult<UpdateResourceInput> {
        let status = self.parse_status()?;
        let sort_order = self.parse_sort_order()?;
        let features = self.parse_features()?;

        Ok(UpdateResourceInput {
            name: self.name.unwrap_or_default(),
            short_description: self.short_description.filter(|s| !s.trim().is_empty()),
            description: self.description.unwrap_or_default(),
            status,
            sort_order,
            features,
            seo_title: self.seo_title.filter(|s| !s.trim().is_empty()),
            seo_description: self.seo_description.filter(|s| !s.trim().is_empty()),
            seo_keywords: self.seo_keywords.filter(|s| !s.trim().is_empty()),
            cover_image: self.cover_image,
            existing_cover_url: self.existing_image.filter(|s| !s.is_empty()),
            existing_gallery_urls: self.existing_gallery,
            new_gallery_images: self.gallery_images,
        })
    }
}
