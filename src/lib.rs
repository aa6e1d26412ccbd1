//! # lexto-rs
//!
//! A dictionary-based tokenizer for mixed Thai and Western text.
//!
//! Thai is written without spaces between words. Word boundaries are found
//! with a longest-match search over a dictionary trie, checked by one step
//! of lookahead, and corrected for vowels and tone marks that cannot stand
//! on their own. Whitespace, Western letters, digits, markup tags and
//! punctuation are split off by character class.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexto_rs::{Tokenizer, TokenKind, TrieBuilder};
//!
//! let mut builder = TrieBuilder::new();
//! builder.load_words("กิน\nข้าว");
//! let tokenizer = Tokenizer::new(builder.build());
//!
//! let tokens = tokenizer.tokenize("กินข้าว OK");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(texts, vec!["กิน", "ข้าว", " ", "ok"]);
//! assert_eq!(tokens[3].kind(), TokenKind::Western);
//! ```
//!
//! ## Sessions
//!
//! [`Lexer`] keeps the last input and a cursor over its tokens. Any number
//! of sessions can share one tokenizer.
//!
//! ```rust
//! use std::sync::Arc;
//! use lexto_rs::{Lexer, Tokenizer, Trie};
//!
//! let tokenizer = Arc::new(Tokenizer::new(Trie::new()));
//! let mut lexer = Lexer::new(Arc::clone(&tokenizer));
//! lexer.set_text("Hello  123<br>");
//!
//! while let Some(token) = lexer.next_token() {
//!     println!("{}", token);
//! }
//! ```
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module with the
//! `python` feature.

pub mod char_categories;
pub mod chunker;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod token;
pub mod tokenizer;
pub mod trie;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use char_categories::{get_char_category, CharCategory};
pub use chunker::{Chunk, Chunker};
pub use config::LexerConfig;
pub use dictionary::DEFAULT_DICTIONARY_FILE;
pub use error::{Error, Result};
pub use resolver::{Resolution, Resolver};
pub use rules::OrthographyRules;
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, Tokenizer};
pub use trie::{Lookup, Trie, TrieBuilder};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
