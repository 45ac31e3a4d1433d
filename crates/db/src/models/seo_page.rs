//! Per-page SEO metadata entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ecare_core::types::Timestamp;

/// A row from the `seo_pages` table, keyed by page (home, about,
/// services, support-model, contact, ndis).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeoPage {
    pub page_key: String,
    pub page_name: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub updated_at: Timestamp,
}

/// JSON body for upserting one page's SEO metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSeoPage {
    pub page_key: String,
    pub page_name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: String,
}
