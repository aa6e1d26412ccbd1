//! Error types for lexto-rs.
//!
//! Tokenization itself never fails. Errors only come from the edges:
//! reading dictionary files and parsing configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for dictionary and configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read
    #[error("IO error on '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the requested dictionary nor the fallback could be opened
    #[error(
        "dictionary unavailable: '{}' and fallback '{}' could not be read",
        .primary.display(),
        .fallback.display()
    )]
    DictionaryUnavailable { primary: PathBuf, fallback: PathBuf },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for lexto-rs operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_unavailable_display() {
        let err = Error::DictionaryUnavailable {
            primary: PathBuf::from("words.txt"),
            fallback: PathBuf::from("lexitron.txt"),
        };
        assert_eq!(
            err.to_string(),
            "dictionary unavailable: 'words.txt' and fallback 'lexitron.txt' could not be read"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("fallback_dictionary is empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: fallback_dictionary is empty"
        );
    }
}
