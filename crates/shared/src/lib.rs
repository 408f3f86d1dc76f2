//! Shared configuration and error types for Cirrus.
//!
//! This crate provides the pieces used across all other crates:
//! - Raw storage settings loaded from files and environment
//! - Configuration error types

pub mod config;
pub mod error;

pub use config::{AppConfig, StorageSettings};
pub use error::ConfigError;
