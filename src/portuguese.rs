//! Front end for stemming Portuguese text.
//!
//! [`PortugueseStemmer`] wraps one of the stemming algorithms and adds the
//! word handling callers normally need around it:
//!
//! 1. The word is trimmed and lowercased.
//! 2. If caching is enabled and the word is cached, the cached stem is returned.
//! 3. Words on the ignore list are returned as they are.
//! 4. Otherwise the algorithm runs, diacritics are optionally stripped from
//!    the result and the stem is cached.
//!
//! # Examples
//!
//! ```
//! use ptstem::portuguese::PortugueseStemmer;
//! use ptstem::stemmer::StemmerType;
//!
//! let mut stemmer = PortugueseStemmer::new(StemmerType::Orengo).unwrap();
//! stemmer.enable_caching(1000);
//! stemmer.ignore(["Lisboa"]);
//!
//! assert_eq!(stemmer.stem_word("  Gatos "), "gat");
//! assert_eq!(stemmer.stem_word("lisboa"), "lisboa");
//! assert_eq!(stemmer.stem_phrase("os gatos"), vec!["os", "gat"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::RuleSet;
use crate::stemmer::{Stemmer, StemmerType, create_stemmer_with_rules};
use crate::support::{IgnoreList, StemCache, remove_diacritics};

/// Configuration for a [`PortugueseStemmer`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Stemming algorithm.
    pub algorithm: StemmerType,
    /// Cache size, caching is disabled when absent.
    pub cache_capacity: Option<usize>,
    /// Remove diacritics from computed stems.
    pub strip_diacritics: bool,
    /// Words returned without stemming.
    pub ignore: Vec<String>,
    /// File with additional ignored words, one per line.
    pub ignore_file: Option<PathBuf>,
    /// JSON rule-definition file replacing the bundled rules.
    pub rules_path: Option<PathBuf>,
}

impl StemmerConfig {
    /// Create a configuration using the given algorithm and defaults otherwise.
    pub fn new(algorithm: StemmerType) -> Self {
        StemmerConfig {
            algorithm,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// Stemmer for Portuguese words and phrases.
pub struct PortugueseStemmer {
    algorithm: Box<dyn Stemmer>,
    cache: Option<StemCache>,
    ignore: IgnoreList,
    strip_diacritics: bool,
}

impl std::fmt::Debug for PortugueseStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortugueseStemmer")
            .field("algorithm", &self.algorithm.name())
            .field("cache", &self.cache)
            .field("ignored", &self.ignore.len())
            .field("strip_diacritics", &self.strip_diacritics)
            .finish()
    }
}

impl PortugueseStemmer {
    /// Create a stemmer using the bundled rules of an algorithm.
    pub fn new(algorithm: StemmerType) -> Result<Self> {
        Self::from_config(&StemmerConfig::new(algorithm))
    }

    /// Create a stemmer from a configuration.
    pub fn from_config(config: &StemmerConfig) -> Result<Self> {
        let rules = config
            .rules_path
            .as_ref()
            .map(RuleSet::from_path)
            .transpose()?;
        let algorithm = create_stemmer_with_rules(config.algorithm, rules.as_ref())?;

        let mut stemmer = Self::with_algorithm(algorithm);
        if let Some(capacity) = config.cache_capacity {
            stemmer.enable_caching(capacity);
        }
        stemmer.set_strip_diacritics(config.strip_diacritics);
        stemmer.ignore(&config.ignore);
        if let Some(path) = &config.ignore_file {
            stemmer.load_ignore_file(path)?;
        }

        info!(
            "created {} stemmer (cache: {:?}, ignored words: {})",
            config.algorithm,
            config.cache_capacity,
            stemmer.ignore.len()
        );
        Ok(stemmer)
    }

    /// Wrap an existing algorithm.
    pub fn with_algorithm(algorithm: Box<dyn Stemmer>) -> Self {
        PortugueseStemmer {
            algorithm,
            cache: None,
            ignore: IgnoreList::new(),
            strip_diacritics: false,
        }
    }

    /// Cache the last `capacity` computed stems. Any previous cache is dropped.
    pub fn enable_caching(&mut self, capacity: usize) {
        debug!("enabling stem cache with capacity {}", capacity);
        self.cache = Some(StemCache::new(capacity));
    }

    /// Drop the cache.
    pub fn disable_caching(&mut self) {
        self.cache = None;
    }

    pub fn is_caching_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn cache(&self) -> Option<&StemCache> {
        self.cache.as_ref()
    }

    pub fn set_strip_diacritics(&mut self, strip: bool) {
        self.strip_diacritics = strip;
    }

    /// Never stem the given words.
    pub fn ignore<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore.extend(words);
    }

    /// Never stem the words of a file with one word per line.
    pub fn load_ignore_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.ignore.load_file(path)
    }

    pub fn clear_ignore_list(&mut self) {
        self.ignore.clear();
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore
    }

    /// Name of the wrapped algorithm.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Stem a single word.
    pub fn stem_word(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();

        if let Some(stem) = self.cache.as_ref().and_then(|cache| cache.get(&word)) {
            return stem;
        }

        if self.ignore.contains(&word) {
            return word;
        }

        let mut stem = self.algorithm.stem(&word);
        if self.strip_diacritics {
            stem = remove_diacritics(&stem);
        }

        if let Some(cache) = &self.cache {
            cache.put(word, stem.clone());
        }
        stem
    }

    /// Stem every space separated word of a phrase.
    ///
    /// Consecutive spaces yield empty words, which stem to empty strings.
    pub fn stem_phrase(&self, phrase: &str) -> Vec<String> {
        phrase.split(' ').map(|word| self.stem_word(word)).collect()
    }
}

impl Stemmer for PortugueseStemmer {
    fn stem(&self, word: &str) -> String {
        self.stem_word(word)
    }

    fn name(&self) -> &'static str {
        self.algorithm.name()
    }
}
