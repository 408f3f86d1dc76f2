//! Path safety error types.

use thiserror::Error;

/// A joined path would resolve outside of the base prefix.
///
/// Always fatal to the calling operation: the adapter layer translates
/// this into a security-relevant rejection of the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("joined path '{joined}' is located outside of base path '{base}'")]
pub struct PathEscape {
    /// The configured base prefix.
    pub base: String,
    /// The joined path that failed the containment check.
    pub joined: String,
}
