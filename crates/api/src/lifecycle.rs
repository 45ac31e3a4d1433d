//! Content resource lifecycle manager.
//!
//! Orchestrates create/update/delete for services and support models:
//! boundary validation, slug (re)generation, slug and sort-order
//! uniqueness checks, asset uploads, and the repository write. One
//! generic implementation covers both kinds; routes instantiate it with
//! the kind they serve.
//!
//! Step ordering within an operation is a contract: validation never
//! triggers an upload, and uploads complete before the database write. An
//! upload that succeeds ahead of a failed write leaves an orphaned object
//! behind; nothing here compensates for that, and resource deletion never
//! touches the store either. Across concurrent requests the uniqueness
//! checks are only a fast path for a friendly message -- the partial
//! unique indexes are what actually guarantees the invariant, surfacing a
//! lost race as the same conflict shape via error classification.

use ecare_core::error::CoreError;
use ecare_core::resource::ResourceKind;
use ecare_core::slug::generate_slug;
use ecare_core::types::DbId;
use ecare_db::models::resource::{ContentResource, NewResource, ResourceStatus};
use ecare_db::repositories::ResourceRepo;
use ecare_db::DbPool;
use ecare_storage::AssetStore;

use crate::error::AppResult;

/// An uploaded file received in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Validated input for creating a content resource.
#[derive(Debug)]
pub struct CreateResourceInput {
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub status: ResourceStatus,
    pub sort_order: i32,
    pub features: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    /// Mandatory on create; `Option` so the boundary parser can report the
    /// missing file as a validation error rather than a parse failure.
    pub cover_image: Option<UploadedFile>,
    pub gallery_images: Vec<UploadedFile>,
}

/// Validated input for updating a content resource.
#[derive(Debug)]
pub struct UpdateResourceInput {
    pub name: String,
    pub short_description: Option<String>,
    pub description: String,
    pub status: ResourceStatus,
    pub sort_order: i32,
    pub features: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    /// A new cover file wins over everything else.
    pub cover_image: Option<UploadedFile>,
    /// Caller-confirmed current cover URL; used when no new file is sent.
    /// When this is also absent the stored URL is kept -- the cover is
    /// never cleared.
    pub existing_cover_url: Option<String>,
    /// Gallery URLs the caller wants to retain, in display order.
    /// Omitting a previously-stored URL is how removal is expressed; the
    /// dropped object stays in the asset store.
    pub existing_gallery_urls: Vec<String>,
    /// New gallery files, appended after the retained URLs.
    pub new_gallery_images: Vec<UploadedFile>,
}

/// Coordinates validation, uniqueness checks, asset uploads, and
/// repository writes for one resource kind.
pub struct ResourceLifecycle<'a> {
    pool: &'a DbPool,
    assets: &'a dyn AssetStore,
    kind: ResourceKind,
}

impl<'a> ResourceLifecycle<'a> {
    pub fn new(pool: &'a DbPool, assets: &'a dyn AssetStore, kind: ResourceKind) -> Self {
        Self { pool, assets, kind }
    }

    /// Create a resource. The cover image is mandatory: nothing exists yet
    /// for an "existing image" fallback to refer to.
    pub async fn create(&self, input: CreateResourceInput) -> AppResult<ContentResource> {
        let name = input.name.trim();
        if name.is_empty() || input.description.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{} name and description are required",
                self.kind.label()
            ))
            .into());
        }

        let cover = input.cover_image.ok_or_else(|| {
            CoreError::Validation(format!("{} image is required", self.kind.label()))
        })?;

        let slug = generate_slug(name);

        self.check_sort_order_free(input.sort_order, None).await?;
        self.check_slug_free(&slug, None).await?;

        let cover_url = self.upload_cover(&slug, cover).await?;

        let mut gallery_urls = Vec::with_capacity(input.gallery_images.len());
        for (i, file) in input.gallery_images.into_iter().enumerate() {
            let key = format!(
                "{}/{slug}/gallery-{}",
                self.kind.asset_prefix(),
                i + 1
            );
            gallery_urls.push(
                self.assets
                    .upload(&key, file.bytes, &file.content_type)
                    .await?,
            );
        }

        let resource = ResourceRepo::insert(
            self.pool,
            self.kind,
            &NewResource {
                name: name.to_string(),
                short_description: input.short_description,
                description: input.description,
                cover_image_url: cover_url,
                gallery_image_urls: gallery_urls,
                features: input.features,
                slug,
                status: input.status,
                sort_order: input.sort_order,
                seo_title: input.seo_title,
                seo_description: input.seo_description,
                seo_keywords: input.seo_keywords,
            },
        )
        .await?;

        Ok(resource)
    }

    /// Update a resource in place, overwriting all mutable fields.
    ///
    /// Last write wins: there is no version check, so a racing concurrent
    /// update is silently superseded.
    pub async fn update(&self, id: DbId, input: UpdateResourceInput) -> AppResult<ContentResource> {
        let current = ResourceRepo::find_by_id(self.pool, self.kind, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: self.kind.entity(),
                id,
            })?;

        let name = input.name.trim();
        if name.is_empty() || input.description.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{} name and description are required",
                self.kind.label()
            ))
            .into());
        }

        self.check_sort_order_free(input.sort_order, Some(id)).await?;

        let slug = generate_slug(name);
        if slug != current.slug {
            self.check_slug_free(&slug, Some(id)).await?;
        }

        // Cover resolution: new file > caller-confirmed existing URL >
        // stored URL. The cover is never cleared to empty.
        let cover_url = match input.cover_image {
            Some(file) => self.upload_cover(&slug, file).await?,
            None => input
                .existing_cover_url
                .filter(|url| !url.is_empty())
                .unwrap_or(current.cover_image_url),
        };

        // Gallery: retained URLs first, then new uploads in submission
        // order. Timestamped keys keep re-uploads from colliding with the
        // create-time gallery objects.
        let mut gallery_urls = input.existing_gallery_urls;
        let uploaded_at = chrono::Utc::now().timestamp_millis();
        for (i, file) in input.new_gallery_images.into_iter().enumerate() {
            let key = format!(
                "{}/{slug}/gallery-{uploaded_at}-{}",
                self.kind.asset_prefix(),
                i + 1
            );
            gallery_urls.push(
                self.assets
                    .upload(&key, file.bytes, &file.content_type)
                    .await?,
            );
        }

        let updated = ResourceRepo::replace(
            self.pool,
            self.kind,
            id,
            &NewResource {
                name: name.to_string(),
                short_description: input.short_description,
                description: input.description,
                cover_image_url: cover_url,
                gallery_image_urls: gallery_urls,
                features: input.features,
                slug,
                status: input.status,
                sort_order: input.sort_order,
                seo_title: input.seo_title,
                seo_description: input.seo_description,
                seo_keywords: input.seo_keywords,
            },
        )
        .await?
        // The row can vanish between the read and the write; report it the
        // same as a missing id.
        .ok_or(CoreError::NotFound {
            entity: self.kind.entity(),
            id,
        })?;

        Ok(updated)
    }

    /// Soft-delete a resource.
    ///
    /// Asset store objects are left behind. Deleting an already-deleted id
    /// reports not-found, the same as any other missing id.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let deleted = ResourceRepo::soft_delete(self.pool, self.kind, id).await?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: self.kind.entity(),
                id,
            }
            .into());
        }
        Ok(())
    }

    async fn upload_cover(&self, slug: &str, file: UploadedFile) -> AppResult<String> {
        let key = format!("{}/{slug}/main", self.kind.asset_prefix());
        Ok(self
            .assets
            .upload(&key, file.bytes, &file.content_type)
            .await?)
    }

    async fn check_sort_order_free(&self, sort_order: i32, exclude: Option<DbId>) -> AppResult<()> {
        if ResourceRepo::sort_order_conflict(self.pool, self.kind, sort_order, exclude).await? {
            return Err(CoreError::Conflict(format!(
                "A {} with order {sort_order} already exists",
                self.kind.display_name()
            ))
            .into());
        }
        Ok(())
    }

    async fn check_slug_free(&self, slug: &str, exclude: Option<DbId>) -> AppResult<()> {
        if ResourceRepo::slug_conflict(self.pool, self.kind, slug, exclude).await? {
            return Err(CoreError::Conflict(format!(
                "A {} with this name already exists",
                self.kind.display_name()
            ))
            .into());
        }
        Ok(())
    }
}
