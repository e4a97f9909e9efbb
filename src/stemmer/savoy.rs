//! Savoy light stemmer.
//!
//! J. Savoy, "Light stemming approaches for the French, Portuguese, German
//! and Hungarian languages", ACM SAC 2006.
//!
//! Removes plural and feminine inflections, then a final vowel. Words of
//! three characters or less are returned unchanged.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::Stemmer;
//! use ptstem::stemmer::savoy::SavoyStemmer;
//!
//! let stemmer = SavoyStemmer::new().unwrap();
//!
//! assert_eq!(stemmer.stem("meninos"), "menin");
//! assert_eq!(stemmer.stem("papéis"), "papel");
//! ```

use log::debug;

use crate::error::Result;
use crate::rules::{LengthGuard, RuleSet, RuleTable};
use crate::stemmer::Stemmer;

/// Savoy stemming algorithm implementation.
#[derive(Debug, Clone)]
pub struct SavoyStemmer {
    plural: RuleTable,
    feminine: RuleTable,
    final_vowel: RuleTable,
}

impl SavoyStemmer {
    /// Create a Savoy stemmer with the bundled rules.
    pub fn new() -> Result<Self> {
        Self::with_rules(&RuleSet::savoy()?)
    }

    /// Create a Savoy stemmer from a custom rule set.
    ///
    /// The rule set must define `pluralreduction`, `femininereduction` and
    /// `finalvowel`.
    pub fn with_rules(rules: &RuleSet) -> Result<Self> {
        let table = |name: &str| -> Result<RuleTable> {
            let step = rules.require_step("savoy", name)?;
            let table = RuleTable::from_step(step, LengthGuard::WordSize);
            debug!("savoy step '{}': {} rules", name, table.len());
            Ok(table)
        };

        Ok(SavoyStemmer {
            plural: table("pluralreduction")?,
            feminine: table("femininereduction")?,
            final_vowel: table("finalvowel")?,
        })
    }

    /// The final vowel table loaded from the rule set.
    ///
    /// Stemming removes a final `a`, `e` or `o` directly and does not consult
    /// this table.
    pub fn final_vowel_table(&self) -> &RuleTable {
        &self.final_vowel
    }

    fn algorithm(&self, word: &str) -> String {
        if word.chars().count() <= 3 {
            return word.to_string();
        }

        let mut stem = self.plural.apply(word);

        if stem.ends_with('a') && stem.chars().count() > 6 {
            stem = self.feminine.apply(&stem);
        }

        if stem.chars().count() > 4 && stem.ends_with(['a', 'e', 'o']) {
            stem.pop();
        }

        stem
    }
}

impl Stemmer for SavoyStemmer {
    fn stem(&self, word: &str) -> String {
        self.algorithm(word)
    }

    fn name(&self) -> &'static str {
        "savoy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savoy_stemmer() {
        let stemmer = SavoyStemmer::new().unwrap();

        assert_eq!(stemmer.stem("meninos"), "menin");
        assert_eq!(stemmer.stem("meninas"), "menin");
        assert_eq!(stemmer.stem("cantores"), "cantor");
        assert_eq!(stemmer.stem("livros"), "livr");
        assert_eq!(stemmer.stem("noites"), "noit");
    }

    #[test]
    fn test_plural_forms() {
        let stemmer = SavoyStemmer::new().unwrap();

        assert_eq!(stemmer.stem("pães"), "pão");
        assert_eq!(stemmer.stem("cães"), "cão");
        assert_eq!(stemmer.stem("papéis"), "papel");
        assert_eq!(stemmer.stem("alemães"), "alemã");
    }

    #[test]
    fn test_final_vowel_needs_five_characters() {
        let stemmer = SavoyStemmer::new().unwrap();

        // "gatos" -> "gato", four characters remain so the vowel stays
        assert_eq!(stemmer.stem("gatos"), "gato");
        assert_eq!(stemmer.stem("caminho"), "caminh");
    }

    #[test]
    fn test_short_words_unchanged() {
        let stemmer = SavoyStemmer::new().unwrap();

        assert_eq!(stemmer.stem("gás"), "gás");
        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem("s"), "s");
    }

    #[test]
    fn test_final_vowel_step_is_loaded() {
        let stemmer = SavoyStemmer::new().unwrap();
        assert_eq!(stemmer.final_vowel_table().len(), 3);
    }

    #[test]
    fn test_missing_final_vowel_step_fails() {
        let rules = RuleSet::from_json_str(
            r#"{"steps": [{"name": "pluralreduction"}, {"name": "femininereduction"}]}"#,
        )
        .unwrap();
        let err = SavoyStemmer::with_rules(&rules).unwrap_err();
        assert!(err.to_string().contains("finalvowel"));
    }
}
