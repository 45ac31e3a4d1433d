//! Repository for the `site_settings` singleton.

use sqlx::PgPool;

use crate::models::settings::{NewSiteSettings, SiteSettings};

const COLUMNS: &str = "id, site_name, tagline, logo_url, favicon_url, created_at, updated_at";

/// Provides read/upsert access to the site-wide settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings, if they have ever been saved.
    pub async fn find(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = 1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create or overwrite the singleton row.
    pub async fn upsert(
        pool: &PgPool,
        input: &NewSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (id, site_name, tagline, logo_url, favicon_url)
             VALUES (1, $1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                site_name = EXCLUDED.site_name,
                tagline = EXCLUDED.tagline,
                logo_url = EXCLUDED.logo_url,
                favicon_url = EXCLUDED.favicon_url,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&input.site_name)
            .bind(&input.tagline)
            .bind(&input.logo_url)
            .bind(&input.favicon_url)
            .fetch_one(pool)
            .await
    }
}
