//! Storage adapter implementation using Apache OpenDAL.

use std::time::{Duration, SystemTime};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use cirrus_shared::{ConfigError, StorageSettings};
use opendal::{ErrorKind, Operator, services};
use tracing::{debug, info, warn};

use crate::path::{normalize, safe_join};

use super::backend::StorageBackend;
use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;
use super::file::{AccessMode, RemoteFile};

/// Object storage adapter.
///
/// Resolves caller-supplied names into containment-checked object keys
/// and delegates byte transfer, signing, and metadata lookups to the
/// OpenDAL operator.
pub struct ObjectStorage {
    operator: Operator,
    config: StorageConfig,
}

impl ObjectStorage {
    /// Create an adapter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = create_operator(&config.provider)?;
        debug!(
            provider = config.provider.name(),
            prefix = %config.prefix,
            "storage adapter ready"
        );
        Ok(Self { operator, config })
    }

    /// Create an adapter from raw settings, validating them eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are incomplete or the provider
    /// cannot be initialized.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        Self::from_config(StorageConfig::from_settings(settings)?)
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Open a remote file with an explicit access mode.
    ///
    /// Only [`AccessMode::Read`] is supported; other modes fail here
    /// rather than on first write attempt.
    pub fn open_with(&self, name: &str, mode: AccessMode) -> Result<RemoteFile, StorageError> {
        let key = self.locate(name)?;
        RemoteFile::new(self.operator.clone(), key, mode)
    }

    /// Resolve a caller-supplied name into a containment-checked key.
    fn locate(&self, name: &str) -> Result<String, StorageError> {
        let cleaned = clean_name(name);
        Ok(safe_join(&self.config.prefix, [cleaned.as_str()])?)
    }
}

impl StorageBackend for ObjectStorage {
    async fn save(&self, name: &str, content: Bytes) -> Result<String, StorageError> {
        let key = self.locate(name)?;
        let bytes = content.len();
        self.operator
            .write(&key, content)
            .await
            .map_err(|e| StorageError::from_service(&key, e))?;
        info!(key = %key, bytes, "object stored");
        Ok(key)
    }

    fn open(&self, name: &str) -> Result<RemoteFile, StorageError> {
        self.open_with(name, AccessMode::Read)
    }

    async fn exists(&self, name: &str) -> Result<bool, StorageError> {
        let key = self.locate(name)?;
        match self.operator.stat(&key).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => {
                warn!(key = %key, error = %e, "existence check failed");
                Err(StorageError::transient(e.to_string()))
            }
        }
    }

    async fn size(&self, name: &str) -> Result<u64, StorageError> {
        let key = self.locate(name)?;
        let meta = self
            .operator
            .stat(&key)
            .await
            .map_err(|e| StorageError::from_service(&key, e))?;
        Ok(meta.content_length())
    }

    fn url(&self, name: &str) -> Result<String, StorageError> {
        let key = self.locate(name)?;
        let domain = self.config.domain.trim_end_matches('/');
        Ok(format!("{domain}/{key}"))
    }

    async fn signed_url(&self, name: &str) -> Result<String, StorageError> {
        let key = self.locate(name)?;
        let ttl = Duration::from_secs(self.config.signed_url_ttl_secs);
        let presigned = self
            .operator
            .presign_read(&key, ttl)
            .await
            .map_err(|e| StorageError::from_service(&key, e))?;
        Ok(presigned.uri().to_string())
    }

    async fn modified_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError> {
        let key = self.locate(name)?;
        let meta = self
            .operator
            .stat(&key)
            .await
            .map_err(|e| StorageError::from_service(&key, e))?;
        meta.last_modified()
            .map(|ts| DateTime::<Utc>::from(SystemTime::from(ts)))
            .ok_or_else(|| StorageError::transient(format!("no last-modified metadata for {key}")))
    }
}

/// Create an OpenDAL operator from provider config.
fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
    let operator = match provider {
        StorageProvider::S3 {
            endpoint,
            bucket,
            access_key,
            secret_key,
            region,
        } => {
            let builder = services::S3::default()
                .endpoint(endpoint)
                .bucket(bucket)
                .access_key_id(access_key)
                .secret_access_key(secret_key)
                .region(region);

            Operator::new(builder)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?
                .finish()
        }
        StorageProvider::LocalFs { root } => {
            let root = root
                .to_str()
                .ok_or_else(|| ConfigError::Invalid("root path is not valid UTF-8".to_string()))?;
            let builder = services::Fs::default().root(root);

            Operator::new(builder)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?
                .finish()
        }
    };

    Ok(operator)
}

/// Clean a caller-supplied name so Windows style paths work as keys.
fn clean_name(name: &str) -> String {
    let mut cleaned = normalize(name).replace('\\', "/");
    // Normalization strips trailing slashes; restore the caller's
    // intent for directory-like names.
    if name.ends_with('/') && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    cleaned
}
