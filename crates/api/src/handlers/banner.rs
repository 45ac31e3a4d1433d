//! Handlers for page banners.
//!
//! One banner per page key; the home page carries a carousel of images,
//! other pages a single image plus an optional mobile variant. Banners
//! are soft-deleted, and uploads follow the same multipart conventions as
//! content resources.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ecare_core::error::CoreError;
use ecare_core::types::DbId;
use ecare_db::models::banner::{Banner, BannerStatus, NewBanner};
use ecare_db::repositories::BannerRepo;

use super::forms::{read_file, read_text};
use crate::error::{AppError, AppResult};
use crate::lifecycle::UploadedFile;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/banners
pub async fn list_banners(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let banners = BannerRepo::list(&state.pool).await?;

    Ok(Json(DataResponse::new(banners)))
}

/// POST /api/v1/admin/banners
///
/// Create a banner from a multipart form. The main image is mandatory;
/// the page key must be unused among non-deleted banners.
pub async fn create_banner(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_banner_form(multipart).await?;
    let status = form.parse_status()?;

    let page_key = form.page_key.as_deref().unwrap_or("").trim().to_string();
    if page_key.is_empty() {
        return Err(CoreError::Validation("Page key is required".into()).into());
    }
    let image = form
        .image
        .as_ref()
        .ok_or_else(|| CoreError::Validation("Banner image is required".into()))?;

    if BannerRepo::page_key_conflict(&state.pool, &page_key, None).await? {
        return Err(
            CoreError::Conflict("A banner for this page already exists".into()).into(),
        );
    }

    let image_url = upload_banner_image(&state, &page_key, "main", image.clone()).await?;
    let mobile_image_url = match &form.mobile_image {
        Some(file) => Some(upload_banner_image(&state, &page_key, "mobile", file.clone()).await?),
        None => None,
    };
    let carousel_image_urls =
        upload_carousel(&state, &page_key, form.existing_carousel, form.carousel_images).await?;

    let banner = BannerRepo::insert(
        &state.pool,
        &NewBanner {
            page_key,
            title: form.title.filter(|s| !s.trim().is_empty()),
            image_url,
            carousel_image_urls,
            mobile_image_url,
            status,
        },
    )
    .await?;

    tracing::info!(
        banner_id = banner.id,
        page_key = %banner.page_key,
        user_id = admin.user_id,
        "Banner created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(banner))))
}

/// PUT /api/v1/admin/banners/{id}
///
/// Overwrite a banner. Missing file fields keep the stored images;
/// carousel URLs absent from `existingImages[...]` are dropped.
pub async fn update_banner(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let current = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;

    let form = read_banner_form(multipart).await?;
    let status = form.parse_status()?;

    let page_key = match form.page_key.as_deref().map(str::trim) {
        None | Some("") => current.page_key.clone(),
        Some(key) => key.to_string(),
    };
    if page_key != current.page_key
        && BannerRepo::page_key_conflict(&state.pool, &page_key, Some(id)).await?
    {
        return Err(
            CoreError::Conflict("A banner for this page already exists".into()).into(),
        );
    }

    let image_url = match &form.image {
        Some(file) => upload_banner_image(&state, &page_key, "main", file.clone()).await?,
        None => current.image_url,
    };
    let mobile_image_url = match &form.mobile_image {
        Some(file) => Some(upload_banner_image(&state, &page_key, "mobile", file.clone()).await?),
        None => current.mobile_image_url,
    };
    let carousel_image_urls =
        upload_carousel(&state, &page_key, form.existing_carousel, form.carousel_images).await?;

    let banner = BannerRepo::replace(
        &state.pool,
        id,
        &NewBanner {
            page_key,
            title: form.title.filter(|s| !s.trim().is_empty()),
            image_url,
            carousel_image_urls,
            mobile_image_url,
            status,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Banner",
        id,
    }))?;

    tracing::info!(banner_id = id, user_id = admin.user_id, "Banner updated",);

    Ok(Json(DataResponse::new(banner)))
}

/// DELETE /api/v1/admin/banners/{id}
///
/// Soft-delete a banner. Its asset store objects are left behind.
pub async fn delete_banner(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BannerRepo::soft_delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }));
    }

    tracing::info!(banner_id = id, user_id = admin.user_id, "Banner deleted",);

    Ok(Json(MessageResponse::new("Banner deleted successfully")))
}

// ---------------------------------------------------------------------------
// Public read
// ---------------------------------------------------------------------------

/// GET /api/v1/banners/{page_key}
///
/// Fetch the active banner for a page.
pub async fn get_public_banner(
    State(state): State<AppState>,
    Path(page_key): Path<String>,
) -> AppResult<Json<DataResponse<Banner>>> {
    let banner = BannerRepo::find_active_by_page_key(&state.pool, &page_key)
        .await?
        .ok_or_else(|| AppError::NotFound("Banner not found".into()))?;

    Ok(Json(DataResponse::new(banner)))
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct BannerForm {
    page_key: Option<String>,
    title: Option<String>,
    status: Option<String>,
    image: Option<UploadedFile>,
    mobile_image: Option<UploadedFile>,
    carousel_images: Vec<UploadedFile>,
    existing_carousel: Vec<String>,
}

async fn read_banner_form(mut multipart: Multipart) -> AppResult<BannerForm> {
    let mut form = BannerForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "pageKey" => form.page_key = Some(read_text(field).await?),
            "title" => form.title = Some(read_text(field).await?),
            "status" => form.status = Some(read_text(field).await?),
            "image" => {
                if let Some(file) = read_file(field).await? {
                    form.image = Some(file);
                }
            }
            "mobileImage" => {
                if let Some(file) = read_file(field).await? {
                    form.mobile_image = Some(file);
                }
            }
            "images" => {
                if let Some(file) = read_file(field).await? {
                    form.carousel_images.push(file);
                }
            }
            n if n.starts_with("existingImages[") => {
                let url = read_text(field).await?;
                if !url.is_empty() {
                    form.existing_carousel.push(url);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

impl BannerForm {
    fn parse_status(&self) -> AppResult<BannerStatus> {
        match self.status.as_deref() {
            None | Some("") => Ok(BannerStatus::Active),
            Some(s) => BannerStatus::parse(s).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!("Invalid status '{s}'")))
            }),
        }
    }
}

async fn upload_banner_image(
    state: &AppState,
    page_key: &str,
    part: &str,
    file: UploadedFile,
) -> AppResult<String> {
    let key = format!("banners/{page_key}/{part}");
    Ok(state
        .assets
        .upload(&key, file.bytes, &file.content_type)
        .await?)
}

/// Resolve the carousel: retained URLs first, then new uploads under
/// timestamped keys so re-uploads never collide with earlier objects.
async fn upload_carousel(
    state: &AppState,
    page_key: &str,
    existing: Vec<String>,
    new_files: Vec<UploadedFile>,
) -> AppResult<Vec<String>> {
    let mut urls = existing;
    let uploaded_at = chrono::Utc::now().timestamp_millis();
    for (i, file) in new_files.into_iter().enumerate() {
        let key = format!("banners/{page_key}/carousel-{uploaded_at}-{}", i + 1);
        urls.push(
            state
                .assets
                .upload(&key, file.bytes, &file.content_type)
                .await?,
        );
    }
    Ok(urls)
}
