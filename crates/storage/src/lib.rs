//! Asset Store adapter: external object storage for uploaded images.
//!
//! The rest of the backend only sees the [`AssetStore`] trait: upload a
//! blob under a key and get back a public URL, delete by key, map a URL
//! back to its key. Production uses [`s3::S3AssetStore`]; tests and local
//! development use [`memory::MemoryAssetStore`].

pub mod memory;
pub mod s3;

use async_trait::async_trait;

/// Error from an asset store operation.
///
/// Storage failures are upstream errors: the caller surfaces them as 500
/// and the admin resubmits. No retry is attempted here.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload failed for key '{key}': {message}")]
    Upload { key: String, message: String },

    #[error("Delete failed for key '{key}': {message}")]
    Delete { key: String, message: String },
}

/// External object storage for image assets.
///
/// Keys are namespaced by the caller (`<kind>/<slug>/<part>`); the store
/// itself is append-mostly -- uploads under a changed slug land on fresh
/// keys, and nothing here cleans up superseded objects.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload a blob under `key`, returning its public URL.
    ///
    /// Overwrites any existing object at the same key.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Delete the object at `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Map a public URL previously returned by [`AssetStore::upload`] back
    /// to its key. Returns `None` for URLs this store did not issue.
    fn key_for_url(&self, url: &str) -> Option<String>;
}

/// Guess the MIME type for an uploaded image from its filename extension.
///
/// Unknown extensions fall back to `application/octet-stream`; the store
/// accepts them, the browser just won't render them inline.
pub fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_common_extensions() {
        assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(content_type_for("logo.png"), "image/png");
        assert_eq!(content_type_for("banner.webp"), "image/webp");
    }

    #[test]
    fn content_type_unknown_extension() {
        assert_eq!(content_type_for("upload.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noextension"), "application/octet-stream");
    }
}
