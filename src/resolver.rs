//! Thai word boundary resolution.
//!
//! Thai is written without spaces between words, so boundaries come from
//! the dictionary. Starting at a position inside a Thai run, the resolver
//! walks the trie as far as it can and picks the longest dictionary word
//! whose end is also a plausible start for the next word (one step of
//! lookahead). Plain longest match tends to overshoot into a word that
//! leaves an unsegmentable remainder; the lookahead rejects most of those.
//!
//! The lookahead is deliberately only one level deep. This is a greedy
//! heuristic, not a full segmentation: it may still pick linguistically
//! wrong boundaries on ambiguous dictionaries, and changing the depth
//! changes the output.
//!
//! Dependent vowels and tone marks that cannot stand alone are not emitted
//! as tokens of their own. The resolver reports them as
//! [`Resolution::MergeIntoPrevious`] and leaves it to the caller to extend
//! the last token.

use std::ops::Range;

use crate::rules::{OrthographyRules, THAI_RULES};
use crate::trie::Trie;

/// What to do with the span found by [`Resolver::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Emit the span as a new Thai token
    NewToken(Range<usize>),
    /// Append the span to the most recently emitted token
    MergeIntoPrevious(Range<usize>),
}

impl Resolution {
    /// Character range of the resolved span within the run
    pub fn span(&self) -> Range<usize> {
        match self {
            Resolution::NewToken(span) | Resolution::MergeIntoPrevious(span) => span.clone(),
        }
    }

    /// Position where the next resolution should start
    pub fn end(&self) -> usize {
        self.span().end
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, Resolution::MergeIntoPrevious(_))
    }
}

/// Longest-match resolver with one step of lookahead
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    trie: &'a Trie,
    rules: &'a OrthographyRules,
}

impl<'a> Resolver<'a> {
    /// Create a resolver using the standard Thai rules
    pub fn new(trie: &'a Trie) -> Self {
        Resolver::with_rules(trie, &THAI_RULES)
    }

    /// Create a resolver with a custom rule set
    pub fn with_rules(trie: &'a Trie, rules: &'a OrthographyRules) -> Self {
        Resolver { trie, rules }
    }

    /// Resolve the token starting at `begin` in a Thai run.
    ///
    /// `begin` must be less than `run.len()`. The returned span always
    /// starts at `begin` and is never empty.
    pub fn resolve(&self, run: &[char], begin: usize) -> Resolution {
        debug_assert!(begin < run.len());

        let mut longest: Option<usize> = None;
        let mut longest_valid: Option<usize> = None;
        let mut node = None;

        // Walk the trie as far as we can
        for pos in begin + 1..=run.len() {
            match self.trie.walk(run[pos - 1], node) {
                Some(next) => {
                    node = Some(next);
                    if self.trie.is_match(next) {
                        longest = Some(pos);
                        if self.is_boundary_valid(run, pos) {
                            longest_valid = Some(pos);
                        }
                    }
                }
                None => break,
            }
        }

        let after_rear_dependent = begin
            .checked_sub(1)
            .is_some_and(|prev| self.rules.is_rear_dependent(run[prev]));

        match longest {
            None => {
                let c = run[begin];
                let span = begin..begin + 1;
                if self.rules.is_front_dependent(c) || self.rules.is_tonal(c) || after_rear_dependent {
                    log::trace!("merging unmatched {:?} at {} into previous token", c, begin);
                    Resolution::MergeIntoPrevious(span)
                } else {
                    Resolution::NewToken(span)
                }
            }
            Some(longest) => {
                let span = begin..longest_valid.unwrap_or(longest);
                if after_rear_dependent {
                    Resolution::MergeIntoPrevious(span)
                } else {
                    Resolution::NewToken(span)
                }
            }
        }
    }

    /// Check whether a word may end at `pos`.
    ///
    /// True at the end of the run, before an ASCII character, or when some
    /// dictionary word starts at `pos`. The end of the run is valid whatever
    /// follows it in the input. Thai runs never hold ASCII, so the ASCII case
    /// only applies to callers that pass a mixed buffer to the resolver.
    pub fn is_boundary_valid(&self, run: &[char], pos: usize) -> bool {
        match run.get(pos) {
            None => true,
            Some(&c) if c <= '~' => true,
            Some(_) => self.has_word_at(run, pos),
        }
    }

    /// Check whether at least one dictionary word starts at `begin`
    fn has_word_at(&self, run: &[char], begin: usize) -> bool {
        let mut node = None;

        for &c in &run[begin..] {
            match self.trie.walk(c, node) {
                Some(next) if self.trie.is_match(next) => return true,
                Some(next) => node = Some(next),
                None => return false,
            }
        }

        false
    }

    /// Split a whole run into resolutions, left to right
    pub fn resolve_all(&self, run: &[char]) -> Vec<Resolution> {
        let mut resolutions = Vec::new();
        let mut pos = 0;

        while pos < run.len() {
            let resolution = self.resolve(run, pos);
            pos = resolution.end();
            resolutions.push(resolution);
        }

        resolutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::TrieBuilder;

    fn make_trie(words: &[&str]) -> Trie {
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.add_word(word);
        }
        builder.build()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_longest_validated_match() {
        let trie = make_trie(&["กข", "กขค", "ง"]);
        let resolver = Resolver::new(&trie);
        let run = chars("กขคง");

        assert_eq!(resolver.resolve(&run, 0), Resolution::NewToken(0..3));
        assert_eq!(resolver.resolve(&run, 3), Resolution::NewToken(3..4));
    }

    #[test]
    fn test_no_overshoot_past_dictionary() {
        let trie = make_trie(&["กข", "กขค"]);
        let resolver = Resolver::new(&trie);
        let run = chars("กขคง");

        // Nothing validates, so the raw longest match wins
        assert_eq!(resolver.resolve(&run, 0), Resolution::NewToken(0..3));
    }

    #[test]
    fn test_lookahead_rejects_overshoot() {
        let trie = make_trie(&["กข", "กขค", "คง"]);
        let resolver = Resolver::new(&trie);
        let run = chars("กขคง");

        assert_eq!(
            resolver.resolve_all(&run),
            vec![Resolution::NewToken(0..2), Resolution::NewToken(2..4)]
        );
    }

    #[test]
    fn test_lookahead_is_one_level_deep() {
        // "คง" validates the boundary after "กข" even though the remainder
        // "จ" has no dictionary entry
        let trie = make_trie(&["กข", "กขค", "คง"]);
        let resolver = Resolver::new(&trie);
        let run = chars("กขคงจ");

        assert_eq!(resolver.resolve(&run, 0), Resolution::NewToken(0..2));
        assert!(resolver.is_boundary_valid(&run, 2));
        assert!(!resolver.is_boundary_valid(&run, 4));
    }

    #[test]
    fn test_boundary_valid_at_end_and_before_ascii() {
        let trie = Trie::new();
        let resolver = Resolver::new(&trie);
        let run = chars("ก.ข");

        assert!(resolver.is_boundary_valid(&run, 3));
        assert!(resolver.is_boundary_valid(&run, 1));
        assert!(!resolver.is_boundary_valid(&run, 2));
    }

    #[test]
    fn test_tonal_mark_merges() {
        let trie = make_trie(&["ก"]);
        let resolver = Resolver::new(&trie);
        let run = chars("ก่");

        assert_eq!(
            resolver.resolve_all(&run),
            vec![
                Resolution::NewToken(0..1),
                Resolution::MergeIntoPrevious(1..2)
            ]
        );
    }

    #[test]
    fn test_front_dependent_merges() {
        let trie = Trie::new();
        let resolver = Resolver::new(&trie);
        let run = chars("กะ");

        assert!(resolver.resolve(&run, 1).is_merge());
    }

    #[test]
    fn test_after_rear_dependent_merges() {
        let trie = Trie::new();
        let resolver = Resolver::new(&trie);
        let run = chars("เก");

        assert_eq!(resolver.resolve(&run, 0), Resolution::NewToken(0..1));
        assert_eq!(resolver.resolve(&run, 1), Resolution::MergeIntoPrevious(1..2));
    }

    #[test]
    fn test_matched_word_after_rear_dependent_merges() {
        let trie = make_trie(&["กา"]);
        let resolver = Resolver::new(&trie);
        let run = chars("เกา");

        assert_eq!(
            resolver.resolve_all(&run),
            vec![
                Resolution::NewToken(0..1),
                Resolution::MergeIntoPrevious(1..3)
            ]
        );
    }

    #[test]
    fn test_empty_dictionary_single_characters() {
        let trie = Trie::new();
        let resolver = Resolver::new(&trie);
        let run = chars("กขคงจ");

        let resolutions = resolver.resolve_all(&run);
        assert_eq!(resolutions.len(), 5);
        assert!(resolutions.iter().all(|r| !r.is_merge()));
        assert!(resolutions.iter().all(|r| r.span().len() == 1));
    }

    #[test]
    fn test_custom_rules() {
        let trie = Trie::new();
        let rules = OrthographyRules::none();
        let resolver = Resolver::with_rules(&trie, &rules);
        let run = chars("ก่");

        assert_eq!(resolver.resolve(&run, 1), Resolution::NewToken(1..2));
    }

    #[test]
    fn test_resolutions_cover_run() {
        let trie = make_trie(&["ไป", "ไปรษณีย์", "รถ", "ไฟ", "รถไฟ"]);
        let resolver = Resolver::new(&trie);
        let run = chars("ไปรษณีย์รถไฟไป");

        let mut pos = 0;
        for resolution in resolver.resolve_all(&run) {
            assert_eq!(resolution.span().start, pos);
            pos = resolution.end();
        }
        assert_eq!(pos, run.len());
    }
}
