//! Storage configuration types.

use std::path::PathBuf;

use cirrus_shared::{ConfigError, StorageSettings};
use serde::{Deserialize, Serialize};

/// Storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: Cloudflare R2, Supabase, AWS S3, MinIO
    S3 {
        /// Service endpoint URL.
        endpoint: String,
        /// Bucket name.
        bucket: String,
        /// Access key.
        access_key: String,
        /// Secret key.
        secret_key: String,
        /// Region.
        region: String,
    },
    /// Local filesystem (development and tests only)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageProvider {
    /// Create an S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
        }
    }

    /// Create a local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }
}

/// Validated storage adapter configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Public base URL for serving stored objects.
    pub domain: String,
    /// Key prefix under which all objects are stored.
    pub prefix: String,
    /// Signed download URL TTL in seconds.
    pub signed_url_ttl_secs: u64,
}

impl StorageConfig {
    /// Default signed URL TTL: 1 hour.
    pub const DEFAULT_SIGNED_URL_TTL: u64 = 3600;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            domain: String::new(),
            prefix: String::new(),
            signed_url_ttl_secs: Self::DEFAULT_SIGNED_URL_TTL,
        }
    }

    /// Set the public base URL.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the key prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the signed download URL TTL.
    #[must_use]
    pub fn with_signed_url_ttl(mut self, secs: u64) -> Self {
        self.signed_url_ttl_secs = secs;
        self
    }

    /// Convert raw settings into a validated config.
    ///
    /// Validation is eager: an incomplete configuration fails here, not
    /// on the first storage operation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required field is empty or the
    /// provider name is not recognized.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, ConfigError> {
        let provider = match settings.provider.as_str() {
            "s3" => {
                require(&settings.endpoint, "endpoint")?;
                require(&settings.bucket, "bucket")?;
                require(&settings.access_key, "access_key")?;
                require(&settings.secret_key, "secret_key")?;
                require(&settings.domain, "domain")?;
                StorageProvider::s3(
                    &settings.endpoint,
                    &settings.bucket,
                    &settings.access_key,
                    &settings.secret_key,
                    &settings.region,
                )
            }
            "fs" => {
                require(&settings.root, "root")?;
                StorageProvider::local_fs(&settings.root)
            }
            other => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        Ok(Self {
            provider,
            domain: settings.domain.clone(),
            prefix: settings.prefix.clone(),
            signed_url_ttl_secs: settings.signed_url_ttl_secs,
        })
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.is_empty() {
        Err(ConfigError::MissingField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3_settings() -> StorageSettings {
        StorageSettings {
            provider: "s3".to_string(),
            endpoint: "https://account.r2.cloudflarestorage.com".to_string(),
            bucket: "media".to_string(),
            access_key: "access".to_string(),
            secret_key: "secret".to_string(),
            domain: "https://cdn.example.com".to_string(),
            prefix: "uploads".to_string(),
            ..StorageSettings::default()
        }
    }

    #[test]
    fn test_from_settings_s3() {
        let config = StorageConfig::from_settings(&s3_settings()).expect("complete settings");
        assert_eq!(config.provider.name(), "s3");
        assert_eq!(config.prefix, "uploads");
        assert_eq!(config.domain, "https://cdn.example.com");
        assert_eq!(
            config.signed_url_ttl_secs,
            StorageConfig::DEFAULT_SIGNED_URL_TTL
        );
    }

    #[rstest::rstest]
    #[case("endpoint")]
    #[case("bucket")]
    #[case("access_key")]
    #[case("secret_key")]
    #[case("domain")]
    fn test_from_settings_missing_fields(#[case] field: &str) {
        let mut settings = s3_settings();
        match field {
            "endpoint" => settings.endpoint.clear(),
            "bucket" => settings.bucket.clear(),
            "access_key" => settings.access_key.clear(),
            "secret_key" => settings.secret_key.clear(),
            _ => settings.domain.clear(),
        }
        let err = StorageConfig::from_settings(&settings).expect_err("field is required");
        assert!(
            matches!(err, ConfigError::MissingField(f) if f == field),
            "expected MissingField({field}), got {err:?}"
        );
    }

    #[test]
    fn test_from_settings_fs_requires_root() {
        let settings = StorageSettings {
            provider: "fs".to_string(),
            ..StorageSettings::default()
        };
        let err = StorageConfig::from_settings(&settings).expect_err("root is required");
        assert!(matches!(err, ConfigError::MissingField("root")));

        let settings = StorageSettings {
            provider: "fs".to_string(),
            root: "./objects".to_string(),
            ..StorageSettings::default()
        };
        let config = StorageConfig::from_settings(&settings).expect("root is enough for fs");
        assert_eq!(config.provider.name(), "local");
    }

    #[test]
    fn test_from_settings_unknown_provider() {
        let settings = StorageSettings {
            provider: "ftp".to_string(),
            ..StorageSettings::default()
        };
        let err = StorageConfig::from_settings(&settings).expect_err("ftp is not a provider");
        assert!(matches!(err, ConfigError::UnknownProvider(p) if p == "ftp"));
    }

    #[test]
    fn test_builder_defaults() {
        let config = StorageConfig::new(StorageProvider::local_fs("./objects"))
            .with_prefix("media")
            .with_signed_url_ttl(600);
        assert_eq!(config.prefix, "media");
        assert_eq!(config.signed_url_ttl_secs, 600);
        assert!(config.domain.is_empty());
    }
}
