//! Storage backend capability trait.

use std::future::Future;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::error::StorageError;
use super::file::RemoteFile;

/// Capability set implemented by storage backends.
///
/// This trait is the seam between callers and a concrete store: byte
/// persistence, lazy retrieval, existence and size queries, URL
/// resolution, and object timestamps. Implementations resolve
/// caller-supplied names themselves; callers never see raw keys except
/// as return values.
pub trait StorageBackend: Send + Sync {
    /// Store `content` under `name`, returning the object key.
    fn save(
        &self,
        name: &str,
        content: Bytes,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;

    /// Open a read-only handle to the object stored under `name`.
    ///
    /// Opening performs no I/O; bytes are fetched on first read.
    fn open(&self, name: &str) -> Result<RemoteFile, StorageError>;

    /// Whether an object exists under `name`.
    ///
    /// Only a definitive "absent" answer maps to `Ok(false)`; service
    /// failures surface as errors instead of masquerading as absence.
    fn exists(&self, name: &str) -> impl Future<Output = Result<bool, StorageError>> + Send;

    /// Size of the object stored under `name`, in bytes.
    fn size(&self, name: &str) -> impl Future<Output = Result<u64, StorageError>> + Send;

    /// Public URL for the object stored under `name`.
    fn url(&self, name: &str) -> Result<String, StorageError>;

    /// Time-limited read URL for the object stored under `name`.
    fn signed_url(&self, name: &str) -> impl Future<Output = Result<String, StorageError>> + Send;

    /// Last-modified time of the object stored under `name`.
    fn modified_time(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<DateTime<Utc>, StorageError>> + Send;

    /// Creation time; the remote store exposes a single timestamp.
    fn created_time(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<DateTime<Utc>, StorageError>> + Send {
        self.modified_time(name)
    }

    /// Last-accessed time; the remote store exposes a single timestamp.
    fn accessed_time(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<DateTime<Utc>, StorageError>> + Send {
        self.modified_time(name)
    }
}
