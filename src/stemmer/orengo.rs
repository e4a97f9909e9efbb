//! Orengo stemmer (RSLP).
//!
//! V. Orengo and C. Huyck, "A stemming algorithm for the Portuguese
//! language", SPIRE 2001, augmented with the RSLP rule revisions.
//!
//! # Algorithm
//!
//! 1. Plural reduction, only for words ending in `s`
//! 2. Feminine reduction, only for words ending in `a` or `ã`
//! 3. Augmentative/diminutive reduction
//! 4. Adverb reduction
//! 5. Noun reduction; if nothing changed, verb reduction; if that changed
//!    nothing either, vowel removal
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::Stemmer;
//! use ptstem::stemmer::orengo::OrengoStemmer;
//!
//! let stemmer = OrengoStemmer::new().unwrap();
//!
//! assert_eq!(stemmer.stem("gatos"), "gat");
//! assert_eq!(stemmer.stem("cantando"), "cant");
//! ```

use log::debug;

use crate::error::Result;
use crate::rules::{LengthGuard, RuleSet, RuleTable};
use crate::stemmer::Stemmer;

/// Steps an Orengo rule set must define.
pub const ORENGO_STEPS: [&str; 7] = [
    "pluralreduction",
    "femininereduction",
    "augmentativediminutivereduction",
    "adverbreduction",
    "nounreduction",
    "verbreduction",
    "vowelremoval",
];

/// Orengo stemming algorithm implementation.
#[derive(Debug, Clone)]
pub struct OrengoStemmer {
    plural: RuleTable,
    feminine: RuleTable,
    augmentative: RuleTable,
    adverb: RuleTable,
    noun: RuleTable,
    verb: RuleTable,
    vowel: RuleTable,
}

impl OrengoStemmer {
    /// Create an Orengo stemmer with the bundled RSLP rules.
    pub fn new() -> Result<Self> {
        Self::with_rules(&RuleSet::orengo()?)
    }

    /// Create an Orengo stemmer from a custom rule set.
    ///
    /// Fails if any of [`ORENGO_STEPS`] is missing.
    pub fn with_rules(rules: &RuleSet) -> Result<Self> {
        let table = |name: &str| -> Result<RuleTable> {
            let step = rules.require_step("orengo", name)?;
            let table = RuleTable::from_step(step, LengthGuard::StemSize);
            debug!("orengo step '{}': {} rules", name, table.len());
            Ok(table)
        };

        Ok(OrengoStemmer {
            plural: table("pluralreduction")?,
            feminine: table("femininereduction")?,
            augmentative: table("augmentativediminutivereduction")?,
            adverb: table("adverbreduction")?,
            noun: table("nounreduction")?,
            verb: table("verbreduction")?,
            vowel: table("vowelremoval")?,
        })
    }

    fn algorithm(&self, word: &str) -> String {
        let mut stem = word.to_string();

        if stem.ends_with('s') {
            stem = self.plural.apply(&stem);
        }
        if stem.ends_with('a') || stem.ends_with('ã') {
            stem = self.feminine.apply(&stem);
        }
        stem = self.augmentative.apply(&stem);
        stem = self.adverb.apply(&stem);

        let reduced = self.noun.apply(&stem);
        if reduced != stem {
            return reduced;
        }
        let reduced = self.verb.apply(&stem);
        if reduced != stem {
            return reduced;
        }
        self.vowel.apply(&stem)
    }
}

impl Stemmer for OrengoStemmer {
    fn stem(&self, word: &str) -> String {
        self.algorithm(word)
    }

    fn name(&self) -> &'static str {
        "orengo"
    }
}
