//! Shared helpers for draining multipart form fields.

use axum::extract::multipart::Field;

use ecare_storage::content_type_for;

use crate::error::{AppError, AppResult};
use crate::lifecycle::UploadedFile;

/// Read a text field.
pub(crate) async fn read_text(field: Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Read a file field, returning `None` for empty bodies: browsers submit
/// an empty part for file inputs the user left blank.
pub(crate) async fn read_file(field: Field<'_>) -> AppResult<Option<UploadedFile>> {
    let filename = field.file_name().unwrap_or("upload").to_string();
    let content_type = field
        .content_type()
        .map(str::to_string)
        .unwrap_or_else(|| content_type_for(&filename).to_string());
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(UploadedFile {
        filename,
        content_type,
        bytes: bytes.to_vec(),
    }))
}
