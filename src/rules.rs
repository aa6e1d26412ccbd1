//! Orthographic rules for Thai dependent characters.
//!
//! Some Thai vowels and marks cannot stand on their own. When the
//! dictionary has no word starting at such a character, the boundary
//! resolver reattaches it to the previous token instead of emitting it
//! separately. The character sets here drive those decisions.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Vowels and diacritics that cannot begin a token
const FRONT_DEPENDENT: &[char] = &[
    '\u{0E30}', // SARA A
    '\u{0E31}', // MAI HAN-AKAT
    '\u{0E32}', // SARA AA
    '\u{0E33}', // SARA AM
    '\u{0E34}', // SARA I
    '\u{0E35}', // SARA II
    '\u{0E36}', // SARA UE
    '\u{0E37}', // SARA UEE
    '\u{0E38}', // SARA U
    '\u{0E39}', // SARA UU
    '\u{0E45}', // LAKKHANGYAO
    '\u{0E47}', // MAITAIKHU
    '\u{0E4C}', // THANTHAKHAT
    '\u{0E4D}', // NIKHAHIT
];

/// Characters after which the next token is merged back onto the previous one
const REAR_DEPENDENT: &[char] = &[
    '\u{0E31}', // MAI HAN-AKAT
    '\u{0E37}', // SARA UEE
    '\u{0E40}', // SARA E
    '\u{0E41}', // SARA AE
    '\u{0E42}', // SARA O
    '\u{0E43}', // SARA AI MAIMUAN
    '\u{0E44}', // SARA AI MAIMALAI
    '\u{0E4D}', // NIKHAHIT
];

/// Tone marks
const TONAL: &[char] = &[
    '\u{0E48}', // MAI EK
    '\u{0E49}', // MAI THO
    '\u{0E4A}', // MAI TRI
    '\u{0E4B}', // MAI CHATTAWA
];

/// Marks that may legally end a word
const ENDING: &[char] = &[
    '\u{0E2F}', // PAIYANNOI
    '\u{0E46}', // MAIYAMOK
];

/// Default Thai rule set, shared by every resolver that does not supply its own
pub static THAI_RULES: Lazy<OrthographyRules> = Lazy::new(OrthographyRules::thai);

/// The character classes consulted by the boundary resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrthographyRules {
    front_dependent: HashSet<char>,
    rear_dependent: HashSet<char>,
    tonal: HashSet<char>,
    ending: HashSet<char>,
}

impl OrthographyRules {
    /// Build a rule set from explicit character lists
    pub fn new(front_dependent: &[char], rear_dependent: &[char], tonal: &[char], ending: &[char]) -> Self {
        OrthographyRules {
            front_dependent: front_dependent.iter().copied().collect(),
            rear_dependent: rear_dependent.iter().copied().collect(),
            tonal: tonal.iter().copied().collect(),
            ending: ending.iter().copied().collect(),
        }
    }

    /// The standard Thai rule set
    pub fn thai() -> Self {
        OrthographyRules::new(FRONT_DEPENDENT, REAR_DEPENDENT, TONAL, ENDING)
    }

    /// A rule set with no dependent characters; every unmatched character
    /// becomes its own token
    pub fn none() -> Self {
        OrthographyRules::default()
    }

    pub fn is_front_dependent(&self, c: char) -> bool {
        self.front_dependent.contains(&c)
    }

    pub fn is_rear_dependent(&self, c: char) -> bool {
        self.rear_dependent.contains(&c)
    }

    pub fn is_tonal(&self, c: char) -> bool {
        self.tonal.contains(&c)
    }

    pub fn is_ending(&self, c: char) -> bool {
        self.ending.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_rules() {
        let rules = OrthographyRules::thai();

        assert!(rules.is_front_dependent('ะ'));
        assert!(rules.is_front_dependent('ุ'));
        assert!(rules.is_front_dependent('์'));
        assert!(rules.is_rear_dependent('เ'));
        assert!(rules.is_rear_dependent('ไ'));
        assert!(rules.is_tonal('่'));
        assert!(rules.is_tonal('๋'));
        assert!(rules.is_ending('ๆ'));
        assert!(rules.is_ending('ฯ'));

        assert!(!rules.is_front_dependent('ก'));
        assert!(!rules.is_rear_dependent('ก'));
        assert!(!rules.is_tonal('ก'));
    }

    #[test]
    fn test_shared_marks() {
        // Mai han-akat, sara uee and nikhahit sit in both lists
        let rules = &*THAI_RULES;
        for c in ['\u{0E31}', '\u{0E37}', '\u{0E4D}'] {
            assert!(rules.is_front_dependent(c));
            assert!(rules.is_rear_dependent(c));
        }
    }

    #[test]
    fn test_empty_rules() {
        let rules = OrthographyRules::none();
        assert!(!rules.is_front_dependent('ะ'));
        assert!(!rules.is_rear_dependent('เ'));
        assert!(!rules.is_tonal('่'));
    }
}
