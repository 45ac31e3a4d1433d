//! Handlers for site-wide settings (singleton, upsert on save).
//!
//! The settings save is the one place a replaced asset is cleaned up: a
//! new logo or favicon upload best-effort deletes the previous object.
//! Deletion failures are logged and never fail the save.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;

use ecare_core::error::CoreError;
use ecare_db::models::settings::{NewSiteSettings, SiteSettings};
use ecare_db::repositories::SettingsRepo;

use super::forms::{read_file, read_text};
use crate::error::{AppError, AppResult};
use crate::lifecycle::UploadedFile;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/settings
pub async fn get_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    fetch_settings(&state).await
}

/// GET /api/v1/settings
///
/// Public mirror, read by the site shell (logo, favicon, name).
pub async fn get_public_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    fetch_settings(&state).await
}

async fn fetch_settings(state: &AppState) -> AppResult<Json<DataResponse<SiteSettings>>> {
    let settings = SettingsRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Site settings not found".into()))?;

    Ok(Json(DataResponse::new(settings)))
}

/// PUT /api/v1/admin/settings
///
/// Create or overwrite the settings from a multipart form. Missing file
/// fields keep the stored logo/favicon URLs.
pub async fn save_settings(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_settings_form(multipart).await?;

    let site_name = form.site_name.as_deref().unwrap_or("").trim().to_string();
    if site_name.is_empty() {
        return Err(CoreError::Validation("Site name is required".into()).into());
    }

    let current = SettingsRepo::find(&state.pool).await?;
    let (current_logo, current_favicon) = match &current {
        Some(s) => (s.logo_url.clone(), s.favicon_url.clone()),
        None => (None, None),
    };

    let logo_url = replace_asset(&state, "logo", form.logo, current_logo).await?;
    let favicon_url = replace_asset(&state, "favicon", form.favicon, current_favicon).await?;

    let settings = SettingsRepo::upsert(
        &state.pool,
        &NewSiteSettings {
            site_name,
            tagline: form.tagline.filter(|s| !s.trim().is_empty()),
            logo_url,
            favicon_url,
        },
    )
    .await?;

    tracing::info!(user_id = admin.user_id, "Site settings saved",);

    Ok(Json(DataResponse::new(settings)))
}

/// Upload a replacement asset and best-effort delete the one it replaces.
/// Without a new file the current URL is kept unchanged.
async fn replace_asset(
    state: &AppState,
    part: &str,
    new_file: Option<UploadedFile>,
    current_url: Option<String>,
) -> AppResult<Option<String>> {
    let Some(file) = new_file else {
        return Ok(current_url);
    };

    // Unique key per upload so the replaced object can be deleted.
    let key = format!("settings/{part}-{}", uuid::Uuid::new_v4());
    let url = state
        .assets
        .upload(&key, file.bytes, &file.content_type)
        .await?;

    if let Some(old_key) = current_url.as_deref().and_then(|u| state.assets.key_for_url(u)) {
        if old_key != key {
            if let Err(e) = state.assets.delete(&old_key).await {
                tracing::warn!(key = %old_key, error = %e, "Failed to delete replaced asset");
            }
        }
    }

    Ok(Some(url))
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct SettingsForm {
    site_name: Option<String>,
    tagline: Option<String>,
    logo: Option<UploadedFile>,
    favicon: Option<UploadedFile>,
}

async fn read_settings_form(mut multipart: Multipart) -> AppResult<SettingsForm> {
    let mut form = SettingsForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "siteName" => form.site_name = Some(read_text(field).await?),
            "tagline" => form.tagline = Some(read_text(field).await?),
            "logo" => {
                if let Some(file) = read_file(field).await? {
                    form.logo = Some(file);
                }
            }
            "favicon" => {
                if let Some(file) = read_file(field).await? {
                    form.favicon = Some(file);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
