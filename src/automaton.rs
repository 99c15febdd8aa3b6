//! Multi-pattern string matching via an Aho-Corasick automaton.
//!
//! The automaton is built once per puzzle from the vocabulary. For every word
//! it registers **two** patterns (the word itself and its character-reversed
//! form) so a single forward scan of any grid line detects occurrences in
//! both reading directions. The caller maps pattern ids back to words through
//! the side table ([`PatternAutomaton::pattern`]) rather than re-deriving
//! anything from trie content.
//!
//! Nodes live in one growable arena (`Vec<Node>`); children and failure links
//! are stored as indices into that arena. The failure link is a back-reference
//! into a structure the node also owns forward edges of, so indices keep the
//! graph cycle-free from the borrow checker's point of view.
//!
//! # Examples
//!
//! ```
//! use wordgrid::automaton::PatternAutomaton;
//!
//! let automaton = PatternAutomaton::build(&["cat"])?;
//! let matches = automaton.search("XTACX");
//!
//! // "TAC" is the reversed pattern of "CAT", ending at offset 3.
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].end, 3);
//! assert!(automaton.pattern(matches[0].pattern_id).is_reverse);
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```

use crate::errors::PuzzleError;
use crate::grid_char::{GridChar, ALPHABET_SIZE};

/// Arena index of the trie root.
const ROOT: usize = 0;

/// One automaton state. Forward edges and the failure link are arena indices.
#[derive(Debug, Clone)]
struct Node {
    /// Outgoing edge per letter A-Z, or `None` when absent.
    children: [Option<usize>; ALPHABET_SIZE],
    /// Longest proper suffix of this state's string that is also a prefix of
    /// some pattern. Root fails to itself.
    failure: usize,
    /// Pattern ids recognized at this state, transitively closed over
    /// failure links during construction.
    output: Vec<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            failure: ROOT,
            output: Vec::new(),
        }
    }
}

/// Side-table entry for one registered pattern.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    /// The letters actually inserted into the trie (uppercase, non-letters
    /// dropped; reversed for reverse variants).
    pub text: String,
    /// The canonical (non-reversed) word, used for reporting.
    pub canonical: String,
    /// Whether this id is the reversed variant of `canonical`.
    pub is_reverse: bool,
}

/// A single pattern occurrence in a scanned sequence.
///
/// Ephemeral: produced per scan and consumed immediately by the match
/// resolver, which turns the end offset into grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index into the automaton's pattern side table.
    pub pattern_id: usize,
    /// 0-based offset of the pattern's last character in the scanned text.
    pub end: usize,
}

/// Aho-Corasick automaton over the vocabulary plus reversed variants.
#[derive(Debug, Clone)]
pub struct PatternAutomaton {
    nodes: Vec<Node>,
    patterns: Vec<PatternEntry>,
}

impl PatternAutomaton {
    /// Builds the automaton for `words`.
    ///
    /// Each word is normalized to uppercase with non-alphabetic characters
    /// dropped, then inserted twice: forward and reversed. Duplicate words
    /// get separate pattern ids; their matches collapse only at the solver's
    /// dedup stage, never here.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyVocabulary`] for an empty word list and
    /// [`PuzzleError::NoAlphabeticChars`] for a word that normalizes to
    /// nothing (a zero-length pattern would match everywhere).
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyVocabulary);
        }

        let mut automaton = Self {
            nodes: vec![Node::new()],
            patterns: Vec::with_capacity(words.len() * 2),
        };

        for word in words {
            let word = word.as_ref();
            let canonical: String = word
                .chars()
                .filter(|c| c.is_grid_letter())
                .map(|c| c.to_grid_letter())
                .collect();
            if canonical.is_empty() {
                return Err(PuzzleError::NoAlphabeticChars {
                    word: word.to_string(),
                });
            }

            let reversed: String = canonical.chars().rev().collect();
            automaton.add_pattern(canonical.clone(), canonical.clone(), false);
            automaton.add_pattern(reversed, canonical, true);
        }

        automaton.build_failure_links();
        Ok(automaton)
    }

    /// Inserts one pattern into the trie and records its side-table entry.
    fn add_pattern(&mut self, text: String, canonical: String, is_reverse: bool) {
        let pattern_id = self.patterns.len();

        let mut current = ROOT;
        for c in text.chars() {
            // build() only hands us A-Z, but stay defensive per-character
            let Some(index) = c.letter_index() else {
                continue;
            };
            current = match self.nodes[current].children[index] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[current].children[index] = Some(child);
                    child
                }
            };
        }

        // A palindrome's forward and reverse ids land on the same terminal
        // node; both are tracked in its output list.
        self.nodes[current].output.push(pattern_id);
        self.patterns.push(PatternEntry {
            text,
            canonical,
            is_reverse,
        });
    }

    /// Computes failure links breadth-first from depth 1.
    ///
    /// For a node reached from its parent via letter `c`, the link target is
    /// found by walking the parent's failure chain until a state with an
    /// outgoing `c`-edge exists (or root). The target's output list is then
    /// unioned into the node's own list, so overlapping patterns (e.g. "A"
    /// ending inside "CAT") all surface during a scan.
    fn build_failure_links(&mut self) {
        let mut queue = std::collections::VecDeque::new();

        // Depth 1: children of root fail back to root.
        for index in 0..ALPHABET_SIZE {
            if let Some(child) = self.nodes[ROOT].children[index] {
                self.nodes[child].failure = ROOT;
                queue.push_back(child);
            }
        }

        while let Some(current) = queue.pop_front() {
            for index in 0..ALPHABET_SIZE {
                let Some(child) = self.nodes[current].children[index] else {
                    continue;
                };
                queue.push_back(child);

                // Walk the parent's failure chain looking for an `index` edge.
                let mut state = self.nodes[current].failure;
                while state != ROOT && self.nodes[state].children[index].is_none() {
                    state = self.nodes[state].failure;
                }

                let target = match self.nodes[state].children[index] {
                    // A depth-1 node can rediscover itself here; that must
                    // fail to root, not to itself.
                    Some(t) if t != child => t,
                    _ => ROOT,
                };
                self.nodes[child].failure = target;

                let inherited = self.nodes[target].output.clone();
                self.nodes[child].output.extend(inherited);
            }
        }
    }

    /// Scans `text` left to right, reporting every pattern occurrence.
    ///
    /// One cursor starts at root; per character it follows failure links
    /// until a transition exists or root is reached, takes the transition,
    /// and emits the current state's entire output list with the current
    /// offset as `end`. Non-alphabetic input resets the cursor to root
    /// without emitting. Amortized linear in `text.len()` regardless of
    /// vocabulary size.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut current = ROOT;

        for (i, c) in text.chars().enumerate() {
            let Some(index) = c.letter_index() else {
                current = ROOT;
                continue;
            };

            while current != ROOT && self.nodes[current].children[index].is_none() {
                current = self.nodes[current].failure;
            }
            current = self.nodes[current].children[index].unwrap_or(ROOT);

            for &pattern_id in &self.nodes[current].output {
                matches.push(Match { pattern_id, end: i });
            }
        }

        matches
    }

    /// Side-table lookup for a pattern id produced by [`search`](Self::search).
    #[must_use]
    pub fn pattern(&self, pattern_id: usize) -> &PatternEntry {
        &self.patterns[pattern_id]
    }

    /// Number of registered patterns (two per vocabulary word).
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_ending_at(matches: &[Match], end: usize) -> Vec<usize> {
        matches
            .iter()
            .filter(|m| m.end == end)
            .map(|m| m.pattern_id)
            .collect()
    }

    #[test]
    fn test_build_registers_forward_and_reverse() {
        let automaton = PatternAutomaton::build(&["cat", "dog"]).unwrap();
        assert_eq!(automaton.pattern_count(), 4);

        assert_eq!(automaton.pattern(0).text, "CAT");
        assert!(!automaton.pattern(0).is_reverse);
        assert_eq!(automaton.pattern(1).text, "TAC");
        assert!(automaton.pattern(1).is_reverse);
        assert_eq!(automaton.pattern(1).canonical, "CAT");
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let words: [&str; 0] = [];
        let err = PatternAutomaton::build(&words).unwrap_err();
        assert_eq!(err.code(), "C001");
    }

    #[test]
    fn test_word_without_letters_rejected() {
        let err = PatternAutomaton::build(&["123"]).unwrap_err();
        assert!(matches!(err, PuzzleError::NoAlphabeticChars { .. }));
    }

    #[test]
    fn test_non_alphabetic_chars_skipped_within_word() {
        // The hyphen is dropped at insertion; the rest of the word survives.
        let automaton = PatternAutomaton::build(&["ice-cream"]).unwrap();
        assert_eq!(automaton.pattern(0).text, "ICECREAM");
        let matches = automaton.search("ICECREAM");
        assert!(matches.iter().any(|m| m.pattern_id == 0 && m.end == 7));
    }

    #[test]
    fn test_search_finds_forward_match() {
        let automaton = PatternAutomaton::build(&["cat"]).unwrap();
        let matches = automaton.search("XXCATXX");
        let forward: Vec<_> = matches
            .iter()
            .filter(|m| !automaton.pattern(m.pattern_id).is_reverse)
            .collect();
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].end, 4);
    }

    #[test]
    fn test_search_finds_reverse_match() {
        let automaton = PatternAutomaton::build(&["cat"]).unwrap();
        let matches = automaton.search("TACO");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].end, 2);
        assert!(automaton.pattern(matches[0].pattern_id).is_reverse);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let automaton = PatternAutomaton::build(&["CAT"]).unwrap();
        assert_eq!(automaton.search("cat").len(), automaton.search("CAT").len());
    }

    #[test]
    fn test_overlapping_patterns_via_output_inheritance() {
        // "AT" ends inside "CAT": both must be reported at the same offset.
        let automaton = PatternAutomaton::build(&["cat", "at"]).unwrap();
        let matches = automaton.search("CAT");

        let at_end_2 = ids_ending_at(&matches, 2);
        let canonicals: Vec<_> = at_end_2
            .iter()
            .map(|&id| automaton.pattern(id).canonical.as_str())
            .collect();
        assert!(canonicals.contains(&"CAT"));
        assert!(canonicals.contains(&"AT"));
    }

    #[test]
    fn test_palindrome_gets_two_ids_at_one_node() {
        let automaton = PatternAutomaton::build(&["level"]).unwrap();
        let matches = automaton.search("LEVEL");

        // Forward and reverse variant both end at offset 4.
        let ids = ids_ending_at(&matches, 4);
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_duplicate_words_get_separate_ids() {
        let automaton = PatternAutomaton::build(&["cat", "cat"]).unwrap();
        let matches = automaton.search("CAT");
        let forward_ids: Vec<_> = matches
            .iter()
            .filter(|m| !automaton.pattern(m.pattern_id).is_reverse)
            .map(|m| m.pattern_id)
            .collect();
        // Two distinct forward ids report the same physical occurrence.
        assert_eq!(forward_ids.len(), 2);
        assert_ne!(forward_ids[0], forward_ids[1]);
    }

    #[test]
    fn test_non_alphabetic_input_resets_cursor() {
        let automaton = PatternAutomaton::build(&["cat"]).unwrap();
        // The digit splits the text; no match may straddle it.
        assert!(automaton.search("CA1T").is_empty());
        // But matching resumes cleanly after the reset.
        let matches = automaton.search("CA1CAT");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].end, 5);
    }

    #[test]
    fn test_repeated_occurrences_all_reported() {
        let automaton = PatternAutomaton::build(&["aba"]).unwrap();
        let matches = automaton.search("ABABA");
        // "ABA" (a palindrome) occurs at ends 2 and 4, twice each
        // (forward id + reverse id).
        assert_eq!(matches.len(), 4);
    }

    #[test]
    fn test_no_match_on_absent_word() {
        let automaton = PatternAutomaton::build(&["zebra"]).unwrap();
        assert!(automaton.search("AARDVARK").is_empty());
    }
}
