//! S3-backed asset store.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::{AssetStore, StorageError};

/// Asset store backed by an S3 (or S3-compatible) bucket.
///
/// Objects are served from `public_base_url`, which is expected to point
/// at the bucket -- a CDN distribution in production, the bucket endpoint
/// itself in development.
#[derive(Debug, Clone)]
pub struct S3AssetStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3AssetStore {
    /// Build a store from an already-configured S3 client.
    ///
    /// `public_base_url` is stored without a trailing slash so URL
    /// construction and [`AssetStore::key_for_url`] agree on the format.
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a store from the ambient AWS environment (credentials chain,
    /// region) plus an optional custom endpoint for S3-compatible stores.
    pub async fn from_env(
        bucket: String,
        public_base_url: String,
        endpoint_url: Option<&str>,
    ) -> Self {
        let config = aws_config::load_from_env().await;
        let client = match endpoint_url {
            Some(endpoint) => {
                let s3_config = aws_sdk_s3::config::Builder::from(&config)
                    .endpoint_url(endpoint)
                    .force_path_style(true)
                    .build();
                aws_sdk_s3::Client::from_conf(s3_config)
            }
            None => aws_sdk_s3::Client::new(&config),
        };
        Self::new(client, bucket, public_base_url)
    }

    fn url_for_key(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}

#[async_trait]
impl AssetStore for S3AssetStore {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(key, bucket = %self.bucket, "Asset uploaded");

        Ok(self.url_for_key(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(key, bucket = %self.bucket, "Asset deleted");

        Ok(())
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|key| !key.is_empty())
    }
}
