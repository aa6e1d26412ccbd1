//! Character classification for mixed Thai and Western text.
//!
//! Every character falls into exactly one category. The chunker extends a
//! run while consecutive characters share a category.

/// Character categories used when partitioning text into runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Whitespace of any kind
    Space,
    /// Latin, Greek, Cyrillic, Armenian letters
    Western,
    /// Any numeric character, including Thai digits
    Digit,
    /// Thai script (consonants, vowels, marks, punctuation)
    Thai,
    /// `<`, the start of a markup tag
    TagOpen,
    /// Punctuation, symbols and everything else
    #[default]
    Other,
}

impl CharCategory {
    /// Check if characters of this category are grouped into multi-character runs
    pub fn forms_runs(&self) -> bool {
        matches!(
            self,
            CharCategory::Space | CharCategory::Western | CharCategory::Digit | CharCategory::Thai
        )
    }
}

/// Check if a character is a Western letter
pub fn is_western(c: char) -> bool {
    matches!(c,
        '\u{0041}'..='\u{005A}'     // A-Z
        | '\u{0061}'..='\u{007A}'   // a-z
        | '\u{00C0}'..='\u{00D6}'   // Latin-1 letters before the multiplication sign
        | '\u{00D8}'..='\u{02AF}'   // Latin-1, Latin Extended-A/B, IPA
        | '\u{0370}'..='\u{058F}'   // Greek, Cyrillic, Armenian
    )
}

/// Check if a character belongs to the Thai block
pub fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E01}'..='\u{0E3A}' | '\u{0E40}'..='\u{0E5B}')
}

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    if c.is_whitespace() {
        return CharCategory::Space;
    }

    if is_western(c) {
        return CharCategory::Western;
    }

    // Checked before Thai so that Thai digits form number runs
    if c.is_numeric() {
        return CharCategory::Digit;
    }

    if is_thai(c) {
        return CharCategory::Thai;
    }

    if c == '<' {
        return CharCategory::TagOpen;
    }

    CharCategory::Other
}
