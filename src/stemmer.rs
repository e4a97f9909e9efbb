//! Stemming algorithms for reducing Portuguese words to their stems.
//!
//! Three algorithms are available:
//!
//! - [`orengo::OrengoStemmer`] - RSLP: plural, feminine, augmentative,
//!   adverb, noun, verb and vowel steps with a noun/verb/vowel fallback chain
//! - [`porter::PorterStemmer`] - the Snowball Portuguese algorithm working on
//!   the R1, R2 and RV regions
//! - [`savoy::SavoyStemmer`] - a light plural/feminine/final vowel stemmer
//!
//! Algorithms expect words that are already trimmed and lowercased; the
//! [`crate::portuguese::PortugueseStemmer`] front end takes care of that.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::{StemmerType, create_stemmer};
//!
//! let stemmer = create_stemmer(StemmerType::Savoy).unwrap();
//! assert_eq!(stemmer.name(), "savoy");
//! assert_eq!(stemmer.stem("meninos"), "menin");
//! ```

use std::fmt;

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::RuleSet;

pub mod orengo;
pub mod porter;
pub mod region;
pub mod savoy;

pub use orengo::OrengoStemmer;
pub use porter::PorterStemmer;
pub use savoy::SavoyStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Available stemming algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StemmerType {
    #[default]
    Orengo,
    Porter,
    Savoy,
}

impl StemmerType {
    pub fn name(&self) -> &'static str {
        match self {
            StemmerType::Orengo => "orengo",
            StemmerType::Porter => "porter",
            StemmerType::Savoy => "savoy",
        }
    }
}

impl fmt::Display for StemmerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Create a stemmer using its default rules.
pub fn create_stemmer(stemmer_type: StemmerType) -> Result<Box<dyn Stemmer>> {
    create_stemmer_with_rules(stemmer_type, None)
}

/// Create a stemmer, optionally with a custom rule set.
///
/// The Porter algorithm has fixed suffix lists, so custom rules are ignored
/// for it.
pub fn create_stemmer_with_rules(
    stemmer_type: StemmerType,
    rules: Option<&RuleSet>,
) -> Result<Box<dyn Stemmer>> {
    let stemmer: Box<dyn Stemmer> = match (stemmer_type, rules) {
        (StemmerType::Orengo, Some(rules)) => Box::new(OrengoStemmer::with_rules(rules)?),
        (StemmerType::Orengo, None) => Box::new(OrengoStemmer::new()?),
        (StemmerType::Savoy, Some(rules)) => Box::new(SavoyStemmer::with_rules(rules)?),
        (StemmerType::Savoy, None) => Box::new(SavoyStemmer::new()?),
        (StemmerType::Porter, rules) => {
            if rules.is_some() {
                warn!("the porter stemmer does not use rule files, ignoring custom rules");
            }
            Box::new(PorterStemmer::new())
        }
    };
    Ok(stemmer)
}
