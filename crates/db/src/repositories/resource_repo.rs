//! Repository for the `services` and `support_models` tables.
//!
//! Both tables share one schema, so every method takes a [`ResourceKind`]
//! and formats its table name into a shared query skeleton. All read
//! paths exclude soft-deleted rows; listings sort by manual order first,
//! recency as the tiebreak.

use sqlx::PgPool;

use ecare_core::resource::ResourceKind;
use ecare_core::types::DbId;

use crate::models::resource::{ContentResource, NewResource, ResourceStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, short_description, description, cover_image_url, \
    gallery_image_urls, features, slug, status, sort_order, \
    seo_title, seo_description, seo_keywords, view_count, booking_count, \
    deleted_at, created_at, updated_at";

/// Listing sort: administrator-assigned order wins, recency breaks ties.
const LIST_ORDER: &str = "sort_order ASC, created_at DESC";

/// Provides CRUD operations for content resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, returning the created row.
    ///
    /// Counters start at zero via column defaults; `created_at` and
    /// `updated_at` are set by the database.
    pub async fn insert(
        pool: &PgPool,
        kind: ResourceKind,
        input: &NewResource,
    ) -> Result<ContentResource, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table}
                (name, short_description, description, cover_image_url,
                 gallery_image_urls, features, slug, status, sort_order,
                 seo_title, seo_description, seo_keywords)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentResource>(&query)
            .bind(&input.name)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(&input.gallery_image_urls)
            .bind(&input.features)
            .bind(&input.slug)
            .bind(input.status)
            .bind(input.sort_order)
            .bind(&input.seo_title)
            .bind(&input.seo_description)
            .bind(&input.seo_keywords)
            .fetch_one(pool)
            .await
    }

    /// Find a resource by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
    ) -> Result<Option<ContentResource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1 AND deleted_at IS NULL",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentResource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active resource by its public slug. Excludes inactive and
    /// soft-deleted rows.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        kind: ResourceKind,
        slug: &str,
    ) -> Result<Option<ContentResource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table}
             WHERE slug = $1 AND status = 'active' AND deleted_at IS NULL",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentResource>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List resources for the admin panel, optionally filtered by status.
    /// Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        kind: ResourceKind,
        status: Option<ResourceStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<ContentResource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table}
             WHERE deleted_at IS NULL
               AND ($1::resource_status IS NULL OR status = $1)
             ORDER BY {LIST_ORDER}
             LIMIT $2 OFFSET $3",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentResource>(&query)
            .bind(status)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Count resources matching the admin listing filter.
    pub async fn count(
        pool: &PgPool,
        kind: ResourceKind,
        status: Option<ResourceStatus>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM {table}
             WHERE deleted_at IS NULL
               AND ($1::resource_status IS NULL OR status = $1)",
            table = kind.table()
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List active resources for the public site.
    pub async fn list_public(
        pool: &PgPool,
        kind: ResourceKind,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<ContentResource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table}
             WHERE status = 'active' AND deleted_at IS NULL
             ORDER BY {LIST_ORDER}
             LIMIT $1 OFFSET $2",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentResource>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Count active resources visible to the public site.
    pub async fn count_public(pool: &PgPool, kind: ResourceKind) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM {table} WHERE status = 'active' AND deleted_at IS NULL",
            table = kind.table()
        );
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Whether another non-deleted resource already uses `slug`.
    ///
    /// `exclude` skips the row being updated so a resource can keep its
    /// own slug.
    pub async fn slug_conflict(
        pool: &PgPool,
        kind: ResourceKind,
        slug: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(
                SELECT 1 FROM {table}
                WHERE slug = $1 AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
            table = kind.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(slug)
            .bind(exclude)
            .fetch_one(pool)
            .await
    }

    /// Whether another non-deleted resource already uses `sort_order`.
    pub async fn sort_order_conflict(
        pool: &PgPool,
        kind: ResourceKind,
        sort_order: i32,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(
                SELECT 1 FROM {table}
                WHERE sort_order = $1 AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
            table = kind.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(sort_order)
            .bind(exclude)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all mutable fields of a resource.
    ///
    /// Counters and `created_at` are preserved; `updated_at` is bumped.
    /// Returns `None` if no non-deleted row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
        input: &NewResource,
    ) -> Result<Option<ContentResource>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                name = $2,
                short_description = $3,
                description = $4,
                cover_image_url = $5,
                gallery_image_urls = $6,
                features = $7,
                slug = $8,
                status = $9,
                sort_order = $10,
                seo_title = $11,
                seo_description = $12,
                seo_keywords = $13,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentResource>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(&input.gallery_image_urls)
            .bind(&input.features)
            .bind(&input.slug)
            .bind(input.status)
            .bind(input.sort_order)
            .bind(&input.seo_title)
            .bind(&input.seo_description)
            .bind(&input.seo_keywords)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a resource by ID. Returns `true` if a row was marked
    /// deleted; a second call on the same id returns `false`.
    pub async fn soft_delete(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
            table = kind.table()
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record one public detail-page view.
    pub async fn increment_view_count(
        pool: &PgPool,
        kind: ResourceKind,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET view_count = view_count + 1 WHERE id = $1 AND deleted_at IS NULL",
            table = kind.table()
        );
        sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(())
    }
}
