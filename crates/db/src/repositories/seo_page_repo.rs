//! Repository for the `seo_pages` table.

use sqlx::PgPool;

use crate::models::seo_page::{SaveSeoPage, SeoPage};

const COLUMNS: &str = "page_key, page_name, title, description, keywords, updated_at";

/// Provides read/upsert access to per-page SEO metadata.
pub struct SeoPageRepo;

impl SeoPageRepo {
    /// List all pages' SEO metadata, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<SeoPage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seo_pages ORDER BY updated_at DESC");
        sqlx::query_as::<_, SeoPage>(&query).fetch_all(pool).await
    }

    /// Fetch one page's SEO metadata by key.
    pub async fn find_by_page_key(
        pool: &PgPool,
        page_key: &str,
    ) -> Result<Option<SeoPage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seo_pages WHERE page_key = $1");
        sqlx::query_as::<_, SeoPage>(&query)
            .bind(page_key)
            .fetch_optional(pool)
            .await
    }

    /// Create or overwrite one page's SEO metadata.
    pub async fn upsert(pool: &PgPool, input: &SaveSeoPage) -> Result<SeoPage, sqlx::Error> {
        let query = format!(
            "INSERT INTO seo_pages (page_key, page_name, title, description, keywords)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (page_key) DO UPDATE SET
                page_name = EXCLUDED.page_name,
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                keywords = EXCLUDED.keywords,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeoPage>(&query)
            .bind(&input.page_key)
            .bind(&input.page_name)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.keywords)
            .fetch_one(pool)
            .await
    }
}
