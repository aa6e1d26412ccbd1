//! Loading the dictionary word list from disk.
//!
//! A missing dictionary is never fatal. If the requested file cannot be
//! read the default file in the working directory is tried, and if that
//! fails too the tokenizer runs with an empty dictionary. Thai runs then
//! split into single characters, still merged by the dependent-character
//! rules.

use std::path::Path;

use crate::error::{Error, Result};
use crate::trie::{Trie, TrieBuilder};

/// Dictionary file looked up in the working directory when no other is usable
pub const DEFAULT_DICTIONARY_FILE: &str = "lexitron.txt";

/// Load a word list, trying `fallback` when `primary` cannot be read.
///
/// Returns [`Error::DictionaryUnavailable`] when neither file can be read.
/// When both paths are the same the file is read once, and its
/// [`Error::Io`] is returned on failure.
pub fn try_load_dictionary(primary: &Path, fallback: &Path) -> Result<Trie> {
    if primary == fallback {
        return read_word_list(primary);
    }

    match read_word_list(primary) {
        Ok(trie) => return Ok(trie),
        Err(e) => log::warn!("{}; trying {}", e, fallback.display()),
    }

    read_word_list(fallback).map_err(|e| {
        log::debug!("{}", e);
        Error::DictionaryUnavailable {
            primary: primary.to_path_buf(),
            fallback: fallback.to_path_buf(),
        }
    })
}

/// Load a word list, degrading to an empty dictionary when nothing can be read
pub fn load_dictionary(primary: &Path, fallback: &Path) -> Trie {
    try_load_dictionary(primary, fallback).unwrap_or_else(|e| {
        log::warn!("{}; continuing with an empty dictionary", e);
        Trie::new()
    })
}

/// Load a word list with [`DEFAULT_DICTIONARY_FILE`] as the fallback
pub fn open(path: impl AsRef<Path>) -> Trie {
    load_dictionary(path.as_ref(), Path::new(DEFAULT_DICTIONARY_FILE))
}

fn read_word_list(path: &Path) -> Result<Trie> {
    let mut builder = TrieBuilder::new();
    builder.load_file(path)?;
    let trie = builder.build();
    log::info!("loaded {} words from {}", trie.len(), path.display());
    Ok(trie)
}
