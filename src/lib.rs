//! # ptstem
//!
//! Stemming toolkit for the Portuguese language.
//!
//! ## Features
//!
//! - Orengo (RSLP), Porter (Snowball) and Savoy stemmers
//! - Suffix tree rule tables with per-rule exceptions
//! - JSON rule-definition files replacing the bundled rules
//! - Front end with LRU caching, ignore lists and diacritic removal
//! - Token filter for analysis pipelines
//!
//! ## Example
//!
//! ```
//! use ptstem::prelude::*;
//!
//! let stemmer = PortugueseStemmer::new(StemmerType::Porter).unwrap();
//! assert_eq!(stemmer.stem_word("Meninas"), "menin");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod portuguese;
pub mod rules;
pub mod stemmer;
pub mod suffix_tree;
pub mod support;

pub mod prelude {
    pub use crate::error::{Result, StemmerError};
    pub use crate::portuguese::{PortugueseStemmer, StemmerConfig};
    pub use crate::rules::RuleSet;
    pub use crate::stemmer::{Stemmer, StemmerType, create_stemmer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
