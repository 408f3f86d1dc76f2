//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Object storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Raw storage settings as read from files and environment.
///
/// These are unvalidated strings; the core crate converts them into a
/// typed provider configuration and rejects incomplete settings eagerly.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Storage provider kind: `"s3"` or `"fs"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Service endpoint URL (S3-compatible providers).
    #[serde(default)]
    pub endpoint: String,
    /// Bucket name (S3-compatible providers).
    #[serde(default)]
    pub bucket: String,
    /// Access key for the storage service.
    #[serde(default)]
    pub access_key: String,
    /// Secret key for the storage service.
    #[serde(default)]
    pub secret_key: String,
    /// Region (S3-compatible providers).
    #[serde(default = "default_region")]
    pub region: String,
    /// Root directory (local filesystem provider).
    #[serde(default)]
    pub root: String,
    /// Public base URL for serving stored objects.
    #[serde(default)]
    pub domain: String,
    /// Key prefix under which all objects are stored.
    #[serde(default)]
    pub prefix: String,
    /// Signed download URL TTL in seconds.
    #[serde(default = "default_signed_url_ttl")]
    pub signed_url_ttl_secs: u64,
}

fn default_provider() -> String {
    "s3".to_string()
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_signed_url_ttl() -> u64 {
    3600 // 1 hour
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            bucket: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            region: default_region(),
            root: String::new(),
            domain: String::new(),
            prefix: String::new(),
            signed_url_ttl_secs: default_signed_url_ttl(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources are layered: `config/default`, then `config/{RUN_MODE}`,
    /// then environment variables prefixed with `CIRRUS` (e.g.
    /// `CIRRUS__STORAGE__BUCKET`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CIRRUS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
