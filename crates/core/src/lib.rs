//! Core logic for Cirrus.
//!
//! This crate adapts a remote object-storage service to a file-storage
//! interface. Caller-supplied names are resolved into containment-checked
//! object keys, and storage calls are translated into operations on the
//! remote store through Apache OpenDAL.
//!
//! # Modules
//!
//! - `path` - Safe joining of caller-supplied names onto a key prefix
//! - `storage` - Storage backend trait and the OpenDAL-backed adapter

pub mod path;
pub mod storage;
