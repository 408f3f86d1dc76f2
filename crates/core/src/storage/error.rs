//! Storage error types.

use cirrus_shared::ConfigError;
use thiserror::Error;

use crate::path::PathEscape;

use super::file::AccessMode;

/// Storage operation errors.
///
/// Remote-service failures are classified, not collapsed: an absent
/// object is `NotFound`, while a network or service failure is
/// `Transient` and must be surfaced rather than treated as absence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Requested name resolves outside the configured prefix.
    #[error("access denied: {0}")]
    Denied(#[from] PathEscape),

    /// Object absent from the remote store.
    #[error("object not found: {key}")]
    NotFound {
        /// Object key that was not found.
        key: String,
    },

    /// Network or service failure; the object may well exist.
    #[error("storage service failure: {0}")]
    Transient(String),

    /// Signed URLs are not supported by the storage provider.
    #[error("signed URLs not supported by storage provider")]
    SignedUrlUnsupported,

    /// Remote files support reading only.
    #[error("remote files are read-only, cannot open in {mode} mode")]
    ReadOnly {
        /// The rejected access mode.
        mode: AccessMode,
    },

    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StorageError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a transient service failure error.
    #[must_use]
    pub fn transient(msg: impl Into<String>) -> Self {
        Self::Transient(msg.into())
    }

    /// Classify an OpenDAL error for an operation on `key`.
    pub(crate) fn from_service(key: &str, err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::not_found(key),
            opendal::ErrorKind::Unsupported => Self::SignedUrlUnsupported,
            _ => Self::Transient(err.to_string()),
        }
    }
}
