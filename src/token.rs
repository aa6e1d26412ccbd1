//! Token representation.
//!
//! A Token is one segmented unit of the input: a Thai word, a run of
//! Western letters, digits or whitespace, a markup tag, or a single
//! punctuation character.

use serde::{Deserialize, Serialize};

/// The type of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Whitespace run
    Space,
    /// Digit run
    Number,
    /// Latin, Greek or Cyrillic letters
    Western,
    /// Thai word
    #[default]
    Thai,
    /// Markup tag, `<` through `>`
    #[serde(rename = "HTML_TAG")]
    Tag,
    /// Punctuation or symbol
    #[serde(rename = "PUNCTUATION")]
    Punct,
}

impl TokenKind {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Space => "SPACE",
            TokenKind::Number => "NUMBER",
            TokenKind::Western => "WESTERN",
            TokenKind::Thai => "THAI",
            TokenKind::Tag => "HTML_TAG",
            TokenKind::Punct => "PUNCTUATION",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text of the token (Western runs may be lowercased)
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes of the covered span in the original string
    pub len: usize,

    /// The type of this token
    pub kind: TokenKind,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize, kind: TokenKind) -> Self {
        Token {
            text,
            start,
            len,
            kind,
        }
    }

    /// Get the text content of the token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the type of the token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte range of the token in the original string
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Append text that directly follows this token in the input
    pub(crate) fn extend(&mut self, text: &str, len: usize) {
        self.text.push_str(text);
        self.len += len;
    }

    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Check if this is punctuation or a symbol
    pub fn is_symbol(&self) -> bool {
        self.kind == TokenKind::Punct
    }

    /// Check if this is a markup tag
    pub fn is_html(&self) -> bool {
        self.kind == TokenKind::Tag
    }

    pub fn is_thai(&self) -> bool {
        self.kind == TokenKind::Thai
    }

    pub fn is_western(&self) -> bool {
        self.kind == TokenKind::Western
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.text, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::with_text("แมว".to_string(), 0, 9, TokenKind::Thai);
        assert_eq!(token.text(), "แมว");
        assert_eq!(token.start, 0);
        assert_eq!(token.span(), 0..9);
        assert_eq!(token.kind(), TokenKind::Thai);
    }

    #[test]
    fn test_default_token() {
        let token = Token::default();
        assert_eq!(token.text(), "");
        assert_eq!(token.span(), 0..0);
        assert_eq!(token.kind(), TokenKind::Thai);
    }

    #[test]
    fn test_token_display() {
        let token = Token::with_text("<br>".to_string(), 3, 4, TokenKind::Tag);
        assert_eq!(format!("{}", token), "<br>/HTML_TAG");
    }

    #[test]
    fn test_predicates() {
        let space = Token::with_text(" ".to_string(), 0, 1, TokenKind::Space);
        let number = Token::with_text("42".to_string(), 0, 2, TokenKind::Number);
        let punct = Token::with_text("!".to_string(), 0, 1, TokenKind::Punct);
        let tag = Token::with_text("<p>".to_string(), 0, 3, TokenKind::Tag);

        assert!(space.is_space() && !space.is_number());
        assert!(number.is_number() && !number.is_symbol());
        assert!(punct.is_symbol() && !punct.is_html());
        assert!(tag.is_html() && !tag.is_space());
    }

    #[test]
    fn test_extend() {
        let mut token = Token::with_text("ก".to_string(), 0, 3, TokenKind::Thai);
        token.extend("่", 3);
        assert_eq!(token.text, "ก่");
        assert_eq!(token.span(), 0..6);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TokenKind::Tag).unwrap();
        assert_eq!(json, "\"HTML_TAG\"");
        let json = serde_json::to_string(&TokenKind::Western).unwrap();
        assert_eq!(json, "\"WESTERN\"");
        let kind: TokenKind = serde_json::from_str("\"PUNCTUATION\"").unwrap();
        assert_eq!(kind, TokenKind::Punct);
    }
}
