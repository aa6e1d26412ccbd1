//! Trie data structure for dictionary-based tokenization.
//!
//! The Trie stores dictionary words as chains of characters in a flat node
//! arena and answers three-valued membership queries, which is what the
//! longest-match search needs to know when to stop scanning.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Index of a node in the trie arena
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// Result of looking up a character sequence in the trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Not a word, and not the prefix of any word
    Absent,
    /// A prefix of at least one word, but not a word itself
    Prefix,
    /// A complete dictionary word
    Word,
}

/// A node in the Trie
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Children nodes, keyed by character
    children: HashMap<char, NodeId>,
    /// Whether this node marks the end of a valid word
    is_leaf: bool,
}

/// A Trie of dictionary words
#[derive(Debug, Clone)]
pub struct Trie {
    /// Node arena; index 0 is the root (the empty prefix)
    nodes: Vec<TrieNode>,
    /// Number of distinct words in the trie
    word_count: usize,
    /// Length of the longest word, in characters
    max_word_len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            word_count: 0,
            max_word_len: 0,
        }
    }
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Length in characters of the longest word
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Add a word (as a slice of characters) to the trie.
    ///
    /// Adding a word twice is a no-op. The empty word is ignored.
    pub fn add(&mut self, word: &[char]) {
        if word.is_empty() {
            return;
        }

        let mut current = ROOT;
        for &c in word {
            current = match self.nodes[current].children.get(&c) {
                Some(&next) => next,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(c, id);
                    id
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.is_leaf {
            node.is_leaf = true;
            self.word_count += 1;
            self.max_word_len = self.max_word_len.max(word.len());
        }
    }

    /// Add a word from a string
    pub fn add_word(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        self.add(&chars);
    }

    /// Walk the trie by one character, returning the next node if it exists.
    ///
    /// `None` as `current` starts from the root.
    pub fn walk(&self, c: char, current: Option<NodeId>) -> Option<NodeId> {
        let node = &self.nodes[current.unwrap_or(ROOT)];
        node.children.get(&c).copied()
    }

    /// Check if a node reached by [`Trie::walk`] is a valid word ending
    pub fn is_match(&self, node: NodeId) -> bool {
        self.nodes[node].is_leaf
    }

    /// Look up a character sequence without modifying the trie
    pub fn lookup(&self, candidate: &[char]) -> Lookup {
        let mut current = ROOT;

        for &c in candidate {
            match self.walk(c, Some(current)) {
                Some(next) => current = next,
                None => return Lookup::Absent,
            }
        }

        if self.nodes[current].is_leaf {
            Lookup::Word
        } else {
            Lookup::Prefix
        }
    }

    /// Look up a string without modifying the trie
    pub fn lookup_str(&self, candidate: &str) -> Lookup {
        let chars: Vec<char> = candidate.chars().collect();
        self.lookup(&chars)
    }

    /// Check if a word exists in the trie
    pub fn has_word(&self, word: &str) -> bool {
        self.lookup_str(word) == Lookup::Word
    }
}

/// Builder for loading a Trie from newline-delimited word lists
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        TrieBuilder { trie: Trie::new() }
    }

    /// Continue building on an existing trie
    pub fn with_trie(trie: Trie) -> Self {
        TrieBuilder { trie }
    }

    /// Add a single word
    pub fn add_word(&mut self, word: &str) -> &mut Self {
        self.trie.add_word(word);
        self
    }

    /// Load words from a string, one word per line.
    ///
    /// Returns the number of lines that were added.
    pub fn load_words(&mut self, content: &str) -> usize {
        let mut added = 0;

        for line in content.lines() {
            // Skip comments and empty lines
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }

            self.trie.add_word(word);
            added += 1;
        }

        added
    }

    /// Load words from a file, one word per line
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let added = self.load_words(&content);
        log::debug!("read {} entries from {}", added, path.display());
        Ok(added)
    }

    /// Build and return the Trie
    pub fn build(self) -> Trie {
        self.trie
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
