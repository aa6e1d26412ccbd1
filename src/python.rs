//! Python bindings for lexto-rs using PyO3
//!
//! This module provides Python-compatible wrappers around the Rust tokenizer.

use std::sync::Arc;

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::chunker::Chunker;
use crate::dictionary::{self, DEFAULT_DICTIONARY_FILE};
use crate::token::Token as RustToken;
use crate::tokenizer::{Lexer as RustLexer, Tokenizer as RustTokenizer};
use crate::trie::{Trie, TrieBuilder};

/// A Python-compatible Token class
#[pyclass(name = "Token")]
#[derive(Clone)]
pub struct PyToken {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub len: usize,
    #[pyo3(get)]
    pub kind: String,
}

impl From<&RustToken> for PyToken {
    fn from(t: &RustToken) -> Self {
        PyToken {
            text: t.text.clone(),
            start: t.start,
            len: t.len,
            kind: t.kind.as_str().to_string(),
        }
    }
}

#[pymethods]
impl PyToken {
    fn __repr__(&self) -> String {
        format!("Token('{}', kind='{}')", self.text, self.kind)
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn is_space(&self) -> bool {
        self.kind == "SPACE"
    }

    fn is_number(&self) -> bool {
        self.kind == "NUMBER"
    }

    fn is_symbol(&self) -> bool {
        self.kind == "PUNCTUATION"
    }

    fn is_html(&self) -> bool {
        self.kind == "HTML_TAG"
    }

    /// Convert to dictionary
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("text", &self.text)?;
        dict.set_item("start", self.start)?;
        dict.set_item("len", self.len)?;
        dict.set_item("kind", &self.kind)?;
        Ok(dict)
    }
}

/// Dictionary-based tokenizer
///
/// Example:
///     >>> from lexto_rs import Tokenizer
///     >>> t = Tokenizer("lexitron.txt")
///     >>> [tok.text for tok in t.tokenize("กินข้าว")]
#[pyclass(name = "Tokenizer")]
pub struct PyTokenizer {
    /// Shared tokenizer - avoids cloning the trie on each tokenize() call
    tokenizer: Arc<RustTokenizer>,
    lowercase_western: bool,
}

impl PyTokenizer {
    fn replace_trie(&mut self, trie: Trie) {
        let tokenizer = RustTokenizer::new(trie).lowercase_western(self.lowercase_western);
        self.tokenizer = Arc::new(tokenizer);
    }
}

#[pymethods]
impl PyTokenizer {
    /// Create a new Tokenizer.
    ///
    /// Args:
    ///     dictionary: Path to a word list (default: lexitron.txt in the
    ///         working directory). Falls back to lexitron.txt, then to no
    ///         dictionary.
    ///     lowercase_western: Lowercase Latin/Greek/Cyrillic words (default: True)
    #[new]
    #[pyo3(signature = (dictionary=None, lowercase_western=true))]
    fn new(dictionary: Option<&str>, lowercase_western: bool) -> Self {
        let trie = dictionary::open(dictionary.unwrap_or(DEFAULT_DICTIONARY_FILE));
        PyTokenizer {
            tokenizer: Arc::new(RustTokenizer::new(trie).lowercase_western(lowercase_western)),
            lowercase_western,
        }
    }

    /// Load words from a string, one word per line
    fn load_words(&mut self, content: &str) {
        let mut builder = TrieBuilder::with_trie(self.tokenizer.trie().clone());
        builder.load_words(content);
        self.replace_trie(builder.build());
    }

    /// Add a single word to the dictionary
    fn add_word(&mut self, word: &str) {
        let mut trie = self.tokenizer.trie().clone();
        trie.add_word(word);
        self.replace_trie(trie);
    }

    /// Check if a word is in the dictionary
    fn has_word(&self, word: &str) -> bool {
        self.tokenizer.trie().has_word(word)
    }

    /// Tokenize a string
    ///
    /// Returns:
    ///     List of Token objects
    fn tokenize(&self, text: &str) -> Vec<PyToken> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(PyToken::from)
            .collect()
    }

    /// Start a session with a cursor over the tokens
    fn lexer(&self) -> PyLexer {
        PyLexer {
            lexer: RustLexer::new(Arc::clone(&self.tokenizer)),
        }
    }

    /// Get the number of words in the dictionary
    fn __len__(&self) -> usize {
        self.tokenizer.trie().len()
    }

    fn __repr__(&self) -> String {
        format!("Tokenizer(words={})", self.tokenizer.trie().len())
    }
}

/// A tokenization session with a cursor
#[pyclass(name = "Lexer")]
pub struct PyLexer {
    lexer: RustLexer,
}

#[pymethods]
impl PyLexer {
    /// Tokenize new text; empty text is ignored
    fn set_text(&mut self, text: &str) {
        self.lexer.set_text(text);
    }

    fn text(&self) -> String {
        self.lexer.text().to_string()
    }

    fn first(&self) -> Option<PyToken> {
        self.lexer.first().map(PyToken::from)
    }

    fn next_token(&mut self) -> Option<PyToken> {
        self.lexer.next_token().map(PyToken::from)
    }

    fn previous_token(&mut self) -> Option<PyToken> {
        self.lexer.previous_token().map(PyToken::from)
    }

    fn has_next(&self) -> bool {
        self.lexer.has_next()
    }

    fn has_previous(&self) -> bool {
        self.lexer.has_previous()
    }

    fn reset(&mut self) {
        self.lexer.reset();
    }

    fn __len__(&self) -> usize {
        self.lexer.tokens().len()
    }
}

/// Split text into typed runs without resolving Thai words
///
/// Returns:
///     List of tuples: (kind, text, start, len)
#[pyfunction]
fn chunk<'py>(py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyList>> {
    let chunker = Chunker::new(text);

    let list = PyList::empty_bound(py);
    for chunk in chunker.make_chunks() {
        list.append((chunk.kind.as_str(), &text[chunk.span()], chunk.start, chunk.len))?;
    }

    Ok(list)
}

/// Tokenize text with a dictionary file, lexitron.txt by default
#[pyfunction]
#[pyo3(signature = (text, dictionary=None))]
fn tokenize(text: &str, dictionary: Option<&str>) -> Vec<PyToken> {
    PyTokenizer::new(dictionary, true).tokenize(text)
}

/// Create the Python module
#[pymodule]
fn lexto_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyToken>()?;
    m.add_class::<PyTokenizer>()?;
    m.add_class::<PyLexer>()?;
    m.add_function(wrap_pyfunction!(chunk, m)?)?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
