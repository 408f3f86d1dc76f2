//! Read-only remote file wrapper.

use std::fmt;

use bytes::Bytes;
use opendal::Operator;

use super::error::StorageError;

/// Access mode requested when opening a remote file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Read the stored object.
    Read,
    /// Overwrite the stored object (unsupported).
    Write,
    /// Append to the stored object (unsupported).
    Append,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Append => "append",
        };
        f.write_str(mode)
    }
}

/// Read-only handle to a stored object.
///
/// Bytes are materialized lazily: the first `read` fetches and buffers
/// the whole object, subsequent reads consume from the buffer.
#[derive(Debug)]
pub struct RemoteFile {
    operator: Operator,
    key: String,
    buffer: Option<Bytes>,
    position: usize,
}

impl RemoteFile {
    /// Open a handle to the object stored under `key`.
    ///
    /// Unsupported access modes are rejected here, not on first use.
    pub(crate) fn new(
        operator: Operator,
        key: String,
        mode: AccessMode,
    ) -> Result<Self, StorageError> {
        if mode != AccessMode::Read {
            return Err(StorageError::ReadOnly { mode });
        }
        Ok(Self {
            operator,
            key,
            buffer: None,
            position: 0,
        })
    }

    /// The object key this file reads from.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Size of the stored object in bytes, from remote metadata.
    ///
    /// Does not force the buffer.
    pub async fn size(&self) -> Result<u64, StorageError> {
        let meta = self
            .operator
            .stat(&self.key)
            .await
            .map_err(|e| StorageError::from_service(&self.key, e))?;
        Ok(meta.content_length())
    }

    /// Read up to `limit` bytes, or the remainder when `limit` is `None`.
    ///
    /// The first call fetches and buffers the whole object; an exhausted
    /// file yields empty chunks.
    pub async fn read(&mut self, limit: Option<usize>) -> Result<Bytes, StorageError> {
        let buffer = match self.buffer.take() {
            Some(buffer) => buffer,
            None => self
                .operator
                .read(&self.key)
                .await
                .map_err(|e| StorageError::from_service(&self.key, e))?
                .to_bytes(),
        };

        let start = self.position.min(buffer.len());
        let end = limit.map_or(buffer.len(), |n| start.saturating_add(n).min(buffer.len()));
        let chunk = buffer.slice(start..end);
        self.position = end;
        self.buffer = Some(buffer);

        Ok(chunk)
    }
}
