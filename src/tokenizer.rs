//! The main tokenizer.
//!
//! This module takes chunked text, resolves Thai runs into words with the
//! [`Resolver`], and produces a flat list of tokens. [`Lexer`] wraps a
//! tokenizer with per-session state: the last input and a cursor over its
//! tokens.

use std::path::Path;
use std::sync::Arc;

use crate::chunker::Chunker;
use crate::config::LexerConfig;
use crate::dictionary;
use crate::resolver::{Resolution, Resolver};
use crate::rules::{OrthographyRules, THAI_RULES};
use crate::token::{Token, TokenKind};
use crate::trie::Trie;

/// The main tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// The dictionary trie (shared reference)
    trie: Arc<Trie>,
    /// Dependent-character rules for Thai runs
    rules: OrthographyRules,
    /// Whether Western runs are lowercased
    lowercase_western: bool,
}

impl Tokenizer {
    /// Create a new tokenizer with the given trie
    pub fn new(trie: Trie) -> Self {
        Tokenizer::with_arc(Arc::new(trie))
    }

    /// Create a new tokenizer with a shared trie reference
    pub fn with_arc(trie: Arc<Trie>) -> Self {
        Tokenizer {
            trie,
            rules: THAI_RULES.clone(),
            lowercase_western: true,
        }
    }

    /// Create a tokenizer from a dictionary file, with the default fallback
    pub fn from_dictionary(path: impl AsRef<Path>) -> Self {
        Tokenizer::new(dictionary::open(path))
    }

    /// Create a tokenizer from a configuration
    pub fn from_config(config: &LexerConfig) -> Self {
        let trie = dictionary::load_dictionary(config.dictionary_path(), &config.fallback_dictionary);
        Tokenizer::new(trie).lowercase_western(config.lowercase_western)
    }

    /// Replace the dependent-character rules
    pub fn with_rules(mut self, rules: OrthographyRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set whether Western runs are lowercased
    pub fn lowercase_western(mut self, enabled: bool) -> Self {
        self.lowercase_western = enabled;
        self
    }

    /// Get a reference to the trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Get the Arc reference to the trie (for sharing)
    pub fn trie_arc(&self) -> Arc<Trie> {
        Arc::clone(&self.trie)
    }

    /// Tokenize a string
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let chunker = Chunker::new(text);
        let mut tokens: Vec<Token> = Vec::new();

        for chunk in chunker.make_chunks() {
            let chunk_text = &text[chunk.span()];

            match chunk.kind {
                TokenKind::Thai => self.tokenize_thai(chunk_text, chunk.start, &mut tokens),
                TokenKind::Western if self.lowercase_western => tokens.push(Token::with_text(
                    chunk_text.to_lowercase(),
                    chunk.start,
                    chunk.len,
                    chunk.kind,
                )),
                kind => tokens.push(Token::with_text(
                    chunk_text.to_string(),
                    chunk.start,
                    chunk.len,
                    kind,
                )),
            }
        }

        tokens
    }

    /// Split a Thai run into words, appending to `tokens`
    fn tokenize_thai(&self, run: &str, offset: usize, tokens: &mut Vec<Token>) {
        let chars: Vec<char> = run.chars().collect();
        let mut byte_positions: Vec<usize> = run.char_indices().map(|(i, _)| i).collect();
        byte_positions.push(run.len());

        let resolver = Resolver::with_rules(&self.trie, &self.rules);
        let mut pos = 0;

        while pos < chars.len() {
            let resolution = resolver.resolve(&chars, pos);
            let span = resolution.span();
            let start = byte_positions[span.start];
            let end = byte_positions[span.end];
            let word = &run[start..end];

            match (&resolution, tokens.last_mut()) {
                (Resolution::MergeIntoPrevious(_), Some(last)) => last.extend(word, end - start),
                _ => tokens.push(Token::with_text(
                    word.to_string(),
                    offset + start,
                    end - start,
                    TokenKind::Thai,
                )),
            }

            pos = span.end;
        }
    }
}

/// A tokenization session: the last input text and a cursor over its tokens
#[derive(Debug, Clone)]
pub struct Lexer {
    tokenizer: Arc<Tokenizer>,
    tokens: Vec<Token>,
    /// Index of the token returned by the next call to `next_token`
    current: usize,
    text: String,
}

impl Lexer {
    /// Create a session; the tokenizer may be shared with other sessions
    pub fn new(tokenizer: impl Into<Arc<Tokenizer>>) -> Self {
        Lexer {
            tokenizer: tokenizer.into(),
            tokens: Vec::new(),
            current: 0,
            text: String::new(),
        }
    }

    /// Tokenize new text, replacing the previous tokens and resetting the cursor.
    ///
    /// Empty text is ignored and the previous state is kept.
    pub fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            log::debug!("ignoring empty input");
            return;
        }

        self.tokens = self.tokenizer.tokenize(text);
        self.text = text.to_string();
        self.current = 0;
    }

    /// The original, untokenized text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens of the current text
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The first token, without moving the cursor
    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Return the token under the cursor and advance.
    ///
    /// `None` once the cursor has passed the last token.
    pub fn next_token(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Step the cursor back and return the token it moved over.
    ///
    /// `None` when the cursor is at the beginning.
    pub fn previous_token(&mut self) -> Option<&Token> {
        if !self.has_previous() {
            return None;
        }
        self.current -= 1;
        self.tokens.get(self.current)
    }

    pub fn has_next(&self) -> bool {
        self.current < self.tokens.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Move the cursor back to the first token
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl<'a> IntoIterator for &'a Lexer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
