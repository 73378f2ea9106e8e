use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let err = ConfigError::InvalidValue {
            field: "showcase_capacity",
            reason: "must be >= showcase_threshold".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for showcase_capacity: must be >= showcase_threshold"
        );
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: Error = DomainError::UnknownAsset {
            asset: "a9".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown asset 'a9'");
    }
}
