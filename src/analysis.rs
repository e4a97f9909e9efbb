//! Token pipeline integration.
//!
//! Splits text into [`token::Token`]s and runs them through filters, so the
//! stemmers can be dropped into an indexing or search pipeline:
//!
//! ```text
//! Tokenizer → Lowercase → Stem
//! ```
//!
//! # Examples
//!
//! ```
//! use ptstem::analysis::Analyzer;
//! use ptstem::stemmer::{StemmerType, create_stemmer};
//!
//! let analyzer = Analyzer::new(create_stemmer(StemmerType::Orengo).unwrap());
//! let stems: Vec<String> = analyzer.analyze("Os Gatos").unwrap().map(|t| t.text).collect();
//! assert_eq!(stems, vec!["os", "gat"]);
//! ```

pub mod stem_filter;
pub mod token;
pub mod tokenizer;

use crate::analysis::stem_filter::{Filter, LowercaseFilter, StemFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::stemmer::Stemmer;

/// Whitespace tokenizer followed by lowercasing and stemming.
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn Filter>>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

impl Analyzer {
    /// Create the default pipeline around a stemmer.
    pub fn new(stemmer: Box<dyn Stemmer>) -> Self {
        Analyzer {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            filters: vec![
                Box::new(LowercaseFilter::new()),
                Box::new(StemFilter::with_stemmer(stemmer)),
            ],
        }
    }

    /// Create a pipeline from parts.
    pub fn with_parts(tokenizer: Box<dyn Tokenizer>, filters: Vec<Box<dyn Filter>>) -> Self {
        Analyzer { tokenizer, filters }
    }

    /// Tokenize and filter a text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }
}
