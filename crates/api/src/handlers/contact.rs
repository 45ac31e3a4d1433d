//! Handlers for the site's contact information (singleton, upsert on save).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use ecare_core::error::CoreError;
use ecare_db::models::contact::{ContactInfo, SaveContactInfo};
use ecare_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/contact
pub async fn get_contact(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    fetch_contact(&state).await
}

/// GET /api/v1/contact
///
/// Public mirror of the contact information.
pub async fn get_public_contact(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    fetch_contact(&state).await
}

async fn fetch_contact(state: &AppState) -> AppResult<Json<DataResponse<ContactInfo>>> {
    let contact = ContactRepo::find(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact information not found".into()))?;

    Ok(Json(DataResponse::new(contact)))
}

/// PUT /api/v1/admin/contact
///
/// Create or overwrite the contact information. Fields the contact page
/// cannot render without must be non-empty.
pub async fn save_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SaveContactInfo>,
) -> AppResult<impl IntoResponse> {
    let required = [
        ("primary_phone", &input.primary_phone),
        ("whatsapp_number", &input.whatsapp_number),
        ("email", &input.email),
        ("address", &input.address),
        ("city", &input.city),
        ("state", &input.state),
        ("postcode", &input.postcode),
        ("country", &input.country),
        ("page_title", &input.page_title),
        ("page_description", &input.page_description),
        ("office_title", &input.office_title),
        ("office_description", &input.office_description),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{name} is required and cannot be empty"
            ))
            .into());
        }
    }

    let contact = ContactRepo::upsert(&state.pool, &input).await?;

    tracing::info!(user_id = admin.user_id, "Contact information saved",);

    Ok(Json(DataResponse::new(contact)))
}
