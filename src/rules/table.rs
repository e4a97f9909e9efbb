//! Rule tables and the rule application algorithm.
//!
//! A [`RuleTable`] is a [`SuffixTree`] of [`Rule`]s plus the step-level
//! properties that decide when the table applies at all. Applying a table
//! rewrites the word with at most one rule:
//!
//! 1. Words shorter than the table's minimum word size are left untouched.
//! 2. Matching suffixes are tried from the longest to the shortest.
//! 3. If the candidate rule's exceptions cover the word, the search stops
//!    and the word is returned unchanged; shorter suffixes are *not* tried.
//! 4. Otherwise the rule fires if the length guard allows it, else the next
//!    shorter candidate is considered.
//!
//! # Examples
//!
//! ```
//! use ptstem::rules::{ExceptionMode, LengthGuard, RuleTable};
//!
//! let mut table = RuleTable::new("plural", 3, ExceptionMode::WholeWord, LengthGuard::StemSize);
//! table.add_rule("s", 2, "", ["lápis"]);
//! table.add_rule("ões", 3, "ão", Vec::<String>::new());
//!
//! assert_eq!(table.apply("gatos"), "gato");
//! assert_eq!(table.apply("canções"), "canção");
//! assert_eq!(table.apply("lápis"), "lápis");
//! ```

use ahash::AHashSet;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::rules::definition::StepDefinition;
use crate::suffix_tree::SuffixTree;

/// How a rule's exceptions are compared against a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionMode {
    /// The whole word must be listed as an exception.
    WholeWord,
    /// Any listed exception that is a suffix of the word blocks the rule.
    #[default]
    LongestSuffix,
}

/// Length checks deciding whether a table or one of its rules may fire.
///
/// Lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthGuard {
    /// Table applies to words of at least `min_word_size` characters; a rule
    /// fires when at least `min_stem_size` characters remain after removing
    /// its suffix.
    #[default]
    StemSize,
    /// Table applies when the word's last index is at least `min_word_size`;
    /// a rule fires when the last index exceeds `min_stem_size`.
    WordSize,
}

impl LengthGuard {
    fn admits_word(self, length: usize, min_word_size: usize) -> bool {
        match self {
            LengthGuard::StemSize => length >= min_word_size,
            LengthGuard::WordSize => length.saturating_sub(1) >= min_word_size,
        }
    }

    fn admits_rule(self, length: usize, suffix_length: usize, min_stem_size: usize) -> bool {
        match self {
            LengthGuard::StemSize => length >= suffix_length + min_stem_size,
            LengthGuard::WordSize => length.saturating_sub(1) > min_stem_size,
        }
    }
}

/// Words for which a rule must not fire.
#[derive(Debug, Clone)]
pub enum Exceptions {
    /// Flat set of whole words.
    WholeWord(AHashSet<String>),
    /// Suffix tree of excepted endings.
    Suffix(SuffixTree<()>),
}

impl Exceptions {
    /// Build the exception representation matching `mode`.
    pub fn new<I, S>(mode: ExceptionMode, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match mode {
            ExceptionMode::WholeWord => Exceptions::WholeWord(
                words.into_iter().map(|w| w.as_ref().to_string()).collect(),
            ),
            ExceptionMode::LongestSuffix => Exceptions::Suffix(words.into_iter().collect()),
        }
    }

    /// Check whether `word` is excepted.
    pub fn excepts(&self, word: &str) -> bool {
        match self {
            Exceptions::WholeWord(words) => words.contains(word),
            Exceptions::Suffix(tree) => tree.longest_suffix_value(word).is_some(),
        }
    }

    /// Number of exception entries.
    pub fn len(&self) -> usize {
        match self {
            Exceptions::WholeWord(words) => words.len(),
            Exceptions::Suffix(tree) => tree.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single suffix rewriting rule.
#[derive(Debug, Clone)]
pub struct Rule {
    min_stem_size: usize,
    replacement: String,
    exceptions: Exceptions,
}

impl Rule {
    pub fn new(
        min_stem_size: usize,
        replacement: impl Into<String>,
        exceptions: Exceptions,
    ) -> Self {
        Rule {
            min_stem_size,
            replacement: replacement.into(),
            exceptions,
        }
    }

    /// Minimum number of characters that must remain once the suffix is removed.
    pub fn min_stem_size(&self) -> usize {
        self.min_stem_size
    }

    /// Text spliced in place of the removed suffix.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn exceptions(&self) -> &Exceptions {
        &self.exceptions
    }

    /// Replace `suffix` at the end of `word` with this rule's replacement.
    ///
    /// `suffix` must be a suffix of `word`.
    pub fn rewrite(&self, word: &str, suffix: &str) -> String {
        let stem = &word[..word.len() - suffix.len()];
        let mut result = String::with_capacity(stem.len() + self.replacement.len());
        result.push_str(stem);
        result.push_str(&self.replacement);
        result
    }
}

/// A compiled stemming step.
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: String,
    min_word_size: usize,
    exception_mode: ExceptionMode,
    length_guard: LengthGuard,
    rules: SuffixTree<Rule>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new(
        name: impl Into<String>,
        min_word_size: usize,
        exception_mode: ExceptionMode,
        length_guard: LengthGuard,
    ) -> Self {
        RuleTable {
            name: name.into(),
            min_word_size,
            exception_mode,
            length_guard,
            rules: SuffixTree::new(),
        }
    }

    /// Compile a step definition into a table.
    pub fn from_step(step: &StepDefinition, length_guard: LengthGuard) -> Self {
        let mut table = RuleTable::new(
            step.name.clone(),
            step.min_word_size,
            step.exception_mode,
            length_guard,
        );
        for rule in &step.rules {
            table.add_rule(
                &rule.suffix,
                rule.min_stem_size,
                &rule.replacement,
                &rule.exceptions,
            );
        }
        table
    }

    /// Add a rule for `suffix`, replacing any rule already stored for it.
    pub fn add_rule<I, S>(
        &mut self,
        suffix: &str,
        min_stem_size: usize,
        replacement: &str,
        exceptions: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exceptions = Exceptions::new(self.exception_mode, exceptions);
        if self
            .rules
            .insert(suffix, Rule::new(min_stem_size, replacement, exceptions))
            .is_some()
        {
            trace!("rule for suffix '{}' replaced in step '{}'", suffix, self.name);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_word_size(&self) -> usize {
        self.min_word_size
    }

    pub fn exception_mode(&self) -> ExceptionMode {
        self.exception_mode
    }

    pub fn length_guard(&self) -> LengthGuard {
        self.length_guard
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the rule that would fire for `word`, with the matched suffix.
    pub fn find<'w>(&self, word: &'w str) -> Option<(&'w str, &Rule)> {
        let length = word.chars().count();
        if !self.length_guard.admits_word(length, self.min_word_size) {
            return None;
        }

        for (suffix, rule) in self.rules.matched_suffixes_and_values(word).into_iter().rev() {
            if rule.exceptions.excepts(word) {
                trace!(
                    "'{}' is an exception for suffix '{}' in step '{}'",
                    word, suffix, self.name
                );
                break;
            }
            if self
                .length_guard
                .admits_rule(length, suffix.chars().count(), rule.min_stem_size)
            {
                return Some((suffix, rule));
            }
        }
        None
    }

    /// Apply the table to `word`, returning it unchanged when no rule fires.
    pub fn apply(&self, word: &str) -> String {
        match self.find(word) {
            Some((suffix, rule)) => {
                let result = rule.rewrite(word, suffix);
                trace!("{}: '{}' -> '{}'", self.name, word, result);
                result
            }
            None => word.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_exceptions() -> Vec<&'static str> {
        Vec::new()
    }

    #[test]
    fn test_short_words_are_untouched() {
        let mut table =
            RuleTable::new("plural", 3, ExceptionMode::WholeWord, LengthGuard::StemSize);
        table.add_rule("s", 0, "", no_exceptions());

        assert_eq!(table.apply("as"), "as");
        assert_eq!(table.apply("mas"), "ma");
    }

    #[test]
    fn test_longest_match_takes_precedence() {
        let mut table = RuleTable::new("t", 0, ExceptionMode::WholeWord, LengthGuard::StemSize);
        table.add_rule("s", 1, "", no_exceptions());
        table.add_rule("as", 1, "a", no_exceptions());

        assert_eq!(table.apply("casas"), "casa");
        let (suffix, rule) = table.find("casas").unwrap();
        assert_eq!(suffix, "as");
        assert_eq!(rule.replacement(), "a");
    }

    #[test]
    fn test_exception_stops_fallback_to_shorter_suffix() {
        let mut table = RuleTable::new("t", 0, ExceptionMode::WholeWord, LengthGuard::StemSize);
        table.add_rule("s", 1, "", no_exceptions());
        table.add_rule("is", 2, "il", ["lápis"]);

        // "s" would apply, but the "is" exception ends the search.
        assert_eq!(table.apply("lápis"), "lápis");
        assert_eq!(table.apply("funis"), "funil");
    }

    #[test]
    fn test_size_guard_falls_through_to_shorter_suffix() {
        let mut table = RuleTable::new("t", 0, ExceptionMode::WholeWord, LengthGuard::StemSize);
        table.add_rule("s", 2, "", no_exceptions());
        table.add_rule("res", 3, "r", no_exceptions());

        // "mares": "res" needs 3 remaining characters, only "ma" is left.
        assert_eq!(table.apply("mares"), "mare");
        assert_eq!(table.apply("flores"), "flor");
    }

    #[test]
    fn test_suffix_exception_mode() {
        let mut table =
            RuleTable::new("noun", 0, ExceptionMode::LongestSuffix, LengthGuard::StemSize);
        table.add_rule("ário", 3, "", ["lionário"]);

        assert_eq!(table.apply("milionário"), "milionário");
        assert_eq!(table.apply("bibliotecário"), "bibliotec");
        assert_eq!(table.exception_mode(), ExceptionMode::LongestSuffix);
    }

    #[test]
    fn test_word_size_guard() {
        let mut table =
            RuleTable::new("plural", 3, ExceptionMode::LongestSuffix, LengthGuard::WordSize);
        table.add_rule("s", 2, "", no_exceptions());

        // last index 2 < 3: table skipped
        assert_eq!(table.apply("mas"), "mas");
        // last index 3 > 2: rule fires
        assert_eq!(table.apply("gats"), "gat");
    }

    #[test]
    fn test_from_step_definition() {
        let set = crate::rules::RuleSet::orengo().unwrap();
        let step = set.step("adverbreduction").unwrap();
        let table = RuleTable::from_step(step, LengthGuard::StemSize);

        assert_eq!(table.name(), "adverbreduction");
        assert_eq!(table.len(), 1);
        assert_eq!(table.apply("rapidamente"), "rapida");
        assert_eq!(table.apply("experimente"), "experimente");
    }

    #[test]
    fn test_whole_word_exceptions() {
        let exceptions = Exceptions::new(ExceptionMode::WholeWord, ["mãe"]);
        assert!(exceptions.excepts("mãe"));
        assert!(!exceptions.excepts("comãe"));
        assert_eq!(exceptions.len(), 1);

        let exceptions = Exceptions::new(ExceptionMode::LongestSuffix, ["mãe"]);
        assert!(exceptions.excepts("comãe"));
    }
}
