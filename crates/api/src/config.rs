use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except secrets have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Asset storage configuration.
    pub storage: StorageConfig,
}

/// Configuration for the S3 asset store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket holding uploaded images.
    pub bucket: String,
    /// Base URL assets are served from (CDN or bucket endpoint).
    pub public_base_url: String,
    /// Custom endpoint for S3-compatible stores (MinIO etc.); `None` uses AWS.
    pub endpoint_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `ASSET_BUCKET`          | **required**            |
    /// | `ASSET_PUBLIC_BASE_URL` | **required**            |
    /// | `ASSET_ENDPOINT_URL`    | unset                   |
    ///
    /// JWT variables are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let storage = StorageConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            storage,
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `ASSET_BUCKET` or `ASSET_PUBLIC_BASE_URL` is not set;
    /// misconfiguration should fail at startup, not on the first upload.
    pub fn from_env() -> Self {
        let bucket = std::env::var("ASSET_BUCKET").expect("ASSET_BUCKET must be set");
        let public_base_url =
            std::env::var("ASSET_PUBLIC_BASE_URL").expect("ASSET_PUBLIC_BASE_URL must be set");
        let endpoint_url = std::env::var("ASSET_ENDPOINT_URL").ok();

        Self {
            bucket,
            public_base_url,
            endpoint_url,
        }
    }
}
