//! Site settings entity model (singleton row).

use serde::Serialize;
use sqlx::FromRow;

use ecare_core::types::Timestamp;

/// Site-wide settings. A single row with `id = 1`, saved via upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    #[serde(skip_serializing)]
    pub id: i32,
    pub site_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Write shape for site settings, resolved by the api layer after any
/// logo/favicon uploads.
#[derive(Debug, Clone)]
pub struct NewSiteSettings {
    pub site_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
}
