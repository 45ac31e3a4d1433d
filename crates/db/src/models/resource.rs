//! Content resource entity model (services and support models).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ecare_core::types::{DbId, Timestamp};

/// Publication status of a content resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Active,
    Inactive,
}

impl ResourceStatus {
    /// Parse a form-submitted status value. Unknown values are rejected at
    /// the boundary rather than defaulted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// A row from the `services` or `support_models` table.
///
/// The soft-delete marker never leaves the repository layer; rows with
/// `deleted_at` set are filtered out of every read path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentResource {
    pub id: DbId,
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub cover_image_url: String,
    pub gallery_image_urls: Vec<String>,
    pub features: Vec<String>,
    pub slug: String,
    pub status: ResourceStatus,
    pub sort_order: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub view_count: i64,
    pub booking_count: i64,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fully-resolved write shape for a content resource.
///
/// Produced by the lifecycle manager after validation, slug derivation,
/// and asset uploads; used verbatim for both insert and replace.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub cover_image_url: String,
    pub gallery_image_urls: Vec<String>,
    pub features: Vec<String>,
    pub slug: String,
    pub status: ResourceStatus,
    pub sort_order: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
}
