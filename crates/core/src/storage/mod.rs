//! Object storage adapter built on Apache OpenDAL.
//!
//! Translates file-storage calls (`save`, `open`, `exists`, `size`,
//! `url`, timestamps) into operations against a remote object store.
//! Every caller-supplied name passes through [`crate::path::safe_join`]
//! before it reaches the remote service, so keys can never resolve
//! outside the configured prefix.
//!
//! Signing, token issuance, and wire-level HTTP belong to OpenDAL and
//! the remote service; this module only decides which key an operation
//! targets and how failures are classified.

mod backend;
mod config;
mod error;
mod file;
mod service;

pub use backend::StorageBackend;
pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use file::{AccessMode, RemoteFile};
pub use service::ObjectStorage;
