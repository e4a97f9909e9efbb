//! Command implementations for the ptstem CLI.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::portuguese::PortugueseStemmer;

/// Execute a CLI command.
pub fn execute_command(args: PtstemArgs) -> Result<()> {
    let config = args.stemmer_config()?;
    let stemmer = PortugueseStemmer::from_config(&config)?;
    let options = OutputOptions::from(&args);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Word(word_args) => {
            let results = stem_words(&stemmer, &word_args.words);
            write_results(&mut out, &results, &options)
        }
        Command::Phrase(phrase_args) => {
            let results = stem_phrase(&stemmer, &phrase_args.text);
            write_results(&mut out, &results, &options)
        }
        Command::File(file_args) => stem_file(&stemmer, file_args, &mut out, &options),
        Command::Interactive => {
            let stdin = io::stdin();
            interactive(&stemmer, stdin.lock(), &mut out, &options)
        }
    }
}

/// Stem a list of words.
pub fn stem_words(stemmer: &PortugueseStemmer, words: &[String]) -> Vec<StemResult> {
    words
        .iter()
        .map(|word| StemResult::new(word.as_str(), stemmer.stem_word(word)))
        .collect()
}

/// Stem the words of a phrase.
pub fn stem_phrase(stemmer: &PortugueseStemmer, text: &str) -> Vec<StemResult> {
    text.split(' ')
        .zip(stemmer.stem_phrase(text))
        .map(|(word, stem)| StemResult::new(word, stem))
        .collect()
}

/// Read a word list with one word per line, skipping blank lines.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Stem words in parallel, keeping their order.
pub fn stem_words_parallel(stemmer: &PortugueseStemmer, words: &[String]) -> Vec<StemResult> {
    words
        .par_iter()
        .map(|word| StemResult::new(word.as_str(), stemmer.stem_word(word)))
        .collect()
}

/// Group results by stem. Words keep their first-seen order and are not
/// repeated.
pub fn group_by_stem(results: &[StemResult]) -> Vec<StemGroup> {
    let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for result in results {
        let words = groups.entry(result.stem.as_str()).or_default();
        if !words.contains(&result.word) {
            words.push(result.word.clone());
        }
    }

    groups
        .into_iter()
        .map(|(stem, words)| StemGroup {
            stem: stem.to_string(),
            words,
        })
        .collect()
}

fn stem_file<W: Write>(
    stemmer: &PortugueseStemmer,
    args: &FileArgs,
    out: &mut W,
    options: &OutputOptions,
) -> Result<()> {
    let words = read_word_list(&args.path)?;
    if words.is_empty() {
        warn!("no words found in {}", args.path.display());
    }

    let start_time = Instant::now();
    let results = stem_words_parallel(stemmer, &words);
    info!(
        "stemmed {} words with {} in {} ms",
        results.len(),
        stemmer.algorithm_name(),
        start_time.elapsed().as_millis()
    );

    if args.group {
        write_groups(out, &group_by_stem(&results), options)
    } else {
        write_results(out, &results, options)
    }
}

/// Stem one word per input line until an empty line or the end of input.
pub fn interactive<R: BufRead, W: Write>(
    stemmer: &PortugueseStemmer,
    input: R,
    out: &mut W,
    options: &OutputOptions,
) -> Result<()> {
    if options.verbosity > 0 && options.format == OutputFormat::Human {
        writeln!(out, "Enter one word per line, an empty line quits.")?;
    }

    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            break;
        }
        let result = StemResult::new(word, stemmer.stem_word(word));
        write_results(out, std::slice::from_ref(&result), options)?;
        out.flush()?;
    }
    Ok(())
}
