//! Command line argument parsing for the ptstem CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::portuguese::StemmerConfig;
use crate::stemmer::StemmerType;

/// ptstem - stemming for Portuguese words and phrases
#[derive(Parser, Debug, Clone)]
#[command(name = "ptstem")]
#[command(about = "Stemming toolkit for the Portuguese language")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PtstemArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Stemming algorithm (overrides the configuration file)
    #[arg(short, long, env = "PTSTEM_ALGORITHM")]
    pub algorithm: Option<StemmerType>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// JSON rule-definition file replacing the bundled rules
    #[arg(long, value_name = "RULES_FILE")]
    pub rules: Option<PathBuf>,

    /// Cache the last N stems
    #[arg(long, value_name = "N")]
    pub cache: Option<usize>,

    /// Remove diacritics from the stems
    #[arg(long)]
    pub strip_diacritics: bool,

    /// File with words that are never stemmed, one per line
    #[arg(long, value_name = "IGNORE_FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PtstemArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the stemmer configuration: the configuration file (or the
    /// defaults) with command line options applied on top.
    pub fn stemmer_config(&self) -> Result<StemmerConfig> {
        let mut config = match &self.config {
            Some(path) => StemmerConfig::from_path(path)?,
            None => StemmerConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(rules) = &self.rules {
            config.rules_path = Some(rules.clone());
        }
        if let Some(capacity) = self.cache {
            config.cache_capacity = Some(capacity);
        }
        if self.strip_diacritics {
            config.strip_diacritics = true;
        }
        if let Some(ignore_file) = &self.ignore_file {
            config.ignore_file = Some(ignore_file.clone());
        }

        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem one or more words
    Word(WordArgs),

    /// Stem every space separated word of a phrase
    Phrase(PhraseArgs),

    /// Stem a file with one word per line
    File(FileArgs),

    /// Read words from standard input until an empty line
    Interactive,
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for stemming a phrase
#[derive(Parser, Debug, Clone)]
pub struct PhraseArgs {
    /// Phrase to stem
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for stemming a word list
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Word list path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Only print distinct stems with their word counts
    #[arg(long)]
    pub group: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
