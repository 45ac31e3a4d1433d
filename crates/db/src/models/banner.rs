//! Page banner entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ecare_core::types::{DbId, Timestamp};

/// Publication status of a banner. Unlike content resources, banners can
/// be staged as drafts before going live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "banner_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    Active,
    Inactive,
    Draft,
}

impl BannerStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }
}

/// A row from the `banners` table.
///
/// One banner per page key among non-deleted rows; the home page uses
/// `carousel_image_urls` for its rotating hero, all other pages a single
/// `image_url` (plus an optional mobile variant).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Banner {
    pub id: DbId,
    pub page_key: String,
    pub title: Option<String>,
    pub image_url: String,
    pub carousel_image_urls: Vec<String>,
    pub mobile_image_url: Option<String>,
    pub status: BannerStatus,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Write shape for a banner, resolved by the api layer after uploads.
#[derive(Debug, Clone)]
pub struct NewBanner {
    pub page_key: String,
    pub title: Option<String>,
    pub image_url: String,
    pub carousel_image_urls: Vec<String>,
    pub mobile_image_url: Option<String>,
    pub status: BannerStatus,
}
