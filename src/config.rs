//! Tokenizer configuration.
//!
//! ```toml
//! dictionary = "/usr/share/lexto/lexitron.txt"
//! fallback_dictionary = "lexitron.txt"
//! lowercase_western = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dictionary::DEFAULT_DICTIONARY_FILE;
use crate::error::{Error, Result};

/// Settings for building a [`crate::Tokenizer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    /// Word list to load, one word per line
    pub dictionary: Option<PathBuf>,
    /// Word list tried when `dictionary` is missing or unreadable
    pub fallback_dictionary: PathBuf,
    /// Lowercase Western-script tokens
    pub lowercase_western: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            dictionary: None,
            fallback_dictionary: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            lowercase_western: true,
        }
    }
}

impl LexerConfig {
    /// Parse a configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// The primary dictionary path, falling back to the default file name
    pub fn dictionary_path(&self) -> &Path {
        self.dictionary
            .as_deref()
            .unwrap_or(self.fallback_dictionary.as_path())
    }

    fn validate(&self) -> Result<()> {
        if self.fallback_dictionary.as_os_str().is_empty() {
            return Err(Error::Config("fallback_dictionary must not be empty".to_string()));
        }
        Ok(())
    }
}
