//! Contact information entity model (singleton row).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ecare_core::types::Timestamp;

/// The site's contact information. A single row with `id = 1`, saved via
/// upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInfo {
    #[serde(skip_serializing)]
    pub id: i32,
    pub primary_phone: String,
    pub secondary_phone: Option<String>,
    pub whatsapp_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub business_hours: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
    pub map_embed_code: Option<String>,
    pub page_title: String,
    pub page_description: String,
    pub office_title: String,
    pub office_description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// JSON body for saving contact information. Required fields are checked
/// non-empty (after trim) at the handler boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveContactInfo {
    pub primary_phone: String,
    pub secondary_phone: Option<String>,
    pub whatsapp_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub business_hours: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
    pub map_embed_code: Option<String>,
    pub page_title: String,
    pub page_description: String,
    pub office_title: String,
    pub office_description: String,
}
