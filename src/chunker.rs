//! Partitioning of mixed text into runs.
//!
//! Whitespace, Western letters, digits and Thai characters are grouped into
//! maximal runs of the same category. A markup tag runs from `<` to the next
//! `>`. Any other character is a chunk of its own. Thai chunks are split
//! further into words by the tokenizer.

use crate::char_categories::{get_char_category, CharCategory};
use crate::token::TokenKind;

/// A chunk of text with its type and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The type of this chunk
    pub kind: TokenKind,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(kind: TokenKind, start: usize, len: usize) -> Self {
        Chunk { kind, start, len }
    }

    /// Byte range of the chunk in the original string
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Chunker for mixed-script text
pub struct Chunker<'a> {
    text: &'a str,
    chars: Vec<char>,
    categories: Vec<CharCategory>,
    /// Byte offset of every character, plus the end of the string
    byte_positions: Vec<usize>,
}

impl<'a> Chunker<'a> {
    /// Create a new chunker for the given string
    pub fn new(text: &'a str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let categories = chars.iter().map(|&c| get_char_category(c)).collect();

        let mut byte_positions: Vec<usize> = Vec::with_capacity(chars.len() + 1);
        byte_positions.extend(text.char_indices().map(|(i, _)| i));
        byte_positions.push(text.len());

        Chunker {
            text,
            chars,
            categories,
            byte_positions,
        }
    }

    /// Get the original string
    pub fn string(&self) -> &str {
        self.text
    }

    /// Chunk the text into runs
    pub fn make_chunks(&self) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < self.chars.len() {
            let cat = self.categories[i];

            let next_i = if cat.forms_runs() {
                self.read_run(i)
            } else if cat == CharCategory::TagOpen {
                self.read_tag(i)
            } else {
                i + 1
            };

            chunks.push(self.chunk(kind_of(cat), i, next_i));
            i = next_i;
        }

        chunks
    }

    /// Read characters of the same category starting at `start_i`
    fn read_run(&self, start_i: usize) -> usize {
        let cat = self.categories[start_i];
        let mut i = start_i + 1;

        while i < self.chars.len() && self.categories[i] == cat {
            i += 1;
        }

        i
    }

    /// Read a tag through the closing `>`; an unterminated tag runs to the end
    fn read_tag(&self, start_i: usize) -> usize {
        self.chars[start_i + 1..]
            .iter()
            .position(|&c| c == '>')
            .map_or(self.chars.len(), |offset| start_i + 1 + offset + 1)
    }

    fn chunk(&self, kind: TokenKind, start_i: usize, end_i: usize) -> Chunk {
        let start = self.byte_positions[start_i];
        let end = self.byte_positions[end_i];
        Chunk::new(kind, start, end - start)
    }
}

fn kind_of(cat: CharCategory) -> TokenKind {
    match cat {
        CharCategory::Space => TokenKind::Space,
        CharCategory::Western => TokenKind::Western,
        CharCategory::Digit => TokenKind::Number,
        CharCategory::Thai => TokenKind::Thai,
        CharCategory::TagOpen => TokenKind::Tag,
        CharCategory::Other => TokenKind::Punct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(String, TokenKind)> {
        Chunker::new(text)
            .make_chunks()
            .into_iter()
            .map(|c| (text[c.span()].to_string(), c.kind))
            .collect()
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            kinds("Hello  123<br>"),
            vec![
                ("Hello".to_string(), TokenKind::Western),
                ("  ".to_string(), TokenKind::Space),
                ("123".to_string(), TokenKind::Number),
                ("<br>".to_string(), TokenKind::Tag),
            ]
        );
    }

    #[test]
    fn test_thai_run() {
        assert_eq!(
            kinds("กินข้าว ok"),
            vec![
                ("กินข้าว".to_string(), TokenKind::Thai),
                (" ".to_string(), TokenKind::Space),
                ("ok".to_string(), TokenKind::Western),
            ]
        );
    }

    #[test]
    fn test_thai_digits_are_numbers() {
        assert_eq!(
            kinds("ปี๒๕๖๗"),
            vec![
                ("ปี".to_string(), TokenKind::Thai),
                ("๒๕๖๗".to_string(), TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_punctuation_is_split() {
        assert_eq!(
            kinds("!?"),
            vec![
                ("!".to_string(), TokenKind::Punct),
                ("?".to_string(), TokenKind::Punct),
            ]
        );
    }

    #[test]
    fn test_unterminated_tag() {
        assert_eq!(
            kinds("a<b c"),
            vec![
                ("a".to_string(), TokenKind::Western),
                ("<b c".to_string(), TokenKind::Tag),
            ]
        );
    }

    #[test]
    fn test_tag_with_thai_inside() {
        assert_eq!(
            kinds("<p title=\"ไทย\">"),
            vec![("<p title=\"ไทย\">".to_string(), TokenKind::Tag)]
        );
    }

    #[test]
    fn test_chunk_positions_cover_text() {
        let text = "ภาษาไทย, English 42 <i>";
        let chunks = Chunker::new(text).make_chunks();

        let mut pos = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, pos);
            pos += chunk.len;
        }
        assert_eq!(pos, text.len());
    }

    #[test]
    fn test_empty() {
        assert!(Chunker::new("").make_chunks().is_empty());
    }
}
