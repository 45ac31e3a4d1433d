//! In-memory asset store for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AssetStore, StorageError};

/// Base used for URLs issued by the in-memory store.
const MEMORY_BASE_URL: &str = "memory://assets";

/// Asset store that keeps uploaded blobs in a process-local map.
///
/// Issued URLs look like `memory://assets/<key>`. Integration tests use
/// [`MemoryAssetStore::keys`] to assert which uploads actually happened.
#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys currently stored, sorted for stable assertions.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .expect("asset store lock poisoned")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Whether an object exists at `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.objects
            .lock()
            .expect("asset store lock poisoned")
            .contains_key(key)
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        self.objects
            .lock()
            .expect("asset store lock poisoned")
            .insert(key.to_string(), bytes);
        Ok(format!("{MEMORY_BASE_URL}/{key}"))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects
            .lock()
            .expect("asset store lock poisoned")
            .remove(key);
        Ok(())
    }

    fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(MEMORY_BASE_URL)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|key| !key.is_empty())
    }
}
