use std::sync::Arc;

use ecare_storage::AssetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The asset store is held as a trait object so tests and local development
/// can swap the S3 implementation for the in-memory one.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecare_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// External image storage.
    pub assets: Arc<dyn AssetStore>,
}
