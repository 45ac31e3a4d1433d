//! Repository for the `banners` table.

use sqlx::PgPool;

use ecare_core::types::DbId;

use crate::models::banner::{Banner, NewBanner};

const COLUMNS: &str = "id, page_key, title, image_url, carousel_image_urls, \
    mobile_image_url, status, deleted_at, created_at, updated_at";

/// Provides CRUD operations for page banners.
pub struct BannerRepo;

impl BannerRepo {
    /// Insert a new banner, returning the created row.
    pub async fn insert(pool: &PgPool, input: &NewBanner) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners
                (page_key, title, image_url, carousel_image_urls, mobile_image_url, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(&input.page_key)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.carousel_image_urls)
            .bind(&input.mobile_image_url)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a banner by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active banner for a page, for the public site.
    pub async fn find_active_by_page_key(
        pool: &PgPool,
        page_key: &str,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banners
             WHERE page_key = $1 AND status = 'active' AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(page_key)
            .fetch_optional(pool)
            .await
    }

    /// Whether another non-deleted banner already uses `page_key`.
    pub async fn page_key_conflict(
        pool: &PgPool,
        page_key: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM banners
                WHERE page_key = $1 AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(page_key)
        .bind(exclude)
        .fetch_one(pool)
        .await
    }

    /// List all non-deleted banners for the admin panel, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banners
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Banner>(&query).fetch_all(pool).await
    }

    /// Overwrite all mutable fields of a banner. Returns `None` if no
    /// non-deleted row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewBanner,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "UPDATE banners SET
                page_key = $2,
                title = $3,
                image_url = $4,
                carousel_image_urls = $5,
                mobile_image_url = $6,
                status = $7,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(&input.page_key)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.carousel_image_urls)
            .bind(&input.mobile_image_url)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a banner by ID. Returns `true` if a row was marked
    /// deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE banners SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
