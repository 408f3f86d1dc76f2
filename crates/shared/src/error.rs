//! Configuration error types.

use thiserror::Error;

/// Errors raised while validating storage configuration.
///
/// Validation happens eagerly at construction so that an incomplete
/// configuration fails before the first storage operation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required settings field is empty.
    #[error("missing required configuration field: {0}")]
    MissingField(&'static str),

    /// The configured provider name is not recognized.
    #[error("unknown storage provider: {0}")]
    UnknownProvider(String),

    /// The provider rejected the supplied configuration.
    #[error("invalid provider configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::MissingField("access_key").to_string(),
            "missing required configuration field: access_key"
        );
        assert_eq!(
            ConfigError::UnknownProvider("ftp".into()).to_string(),
            "unknown storage provider: ftp"
        );
    }
}
