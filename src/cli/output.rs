//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PtstemArgs};
use crate::error::Result;

/// A word and its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}

impl StemResult {
    pub fn new(word: impl Into<String>, stem: impl Into<String>) -> Self {
        StemResult {
            word: word.into(),
            stem: stem.into(),
        }
    }
}

/// A stem shared by several words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemGroup {
    pub stem: String,
    pub words: Vec<String>,
}

/// Output formatting settings taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub verbosity: u8,
}

impl From<&PtstemArgs> for OutputOptions {
    fn from(args: &PtstemArgs) -> Self {
        OutputOptions {
            format: args.output_format,
            pretty: args.pretty,
            verbosity: args.verbosity(),
        }
    }
}

/// Write stem results in the requested format.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[StemResult],
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            for result in results {
                if options.verbosity > 1 {
                    writeln!(out, "{} -> {}", result.word, result.stem)?;
                } else {
                    writeln!(out, "{} {}", result.word, result.stem)?;
                }
            }
        }
        OutputFormat::Json => write_json(out, results, options)?,
    }
    Ok(())
}

/// Write stem groups in the requested format.
pub fn write_groups<W: Write>(
    out: &mut W,
    groups: &[StemGroup],
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            for group in groups {
                let words = group.words.join(", ");
                writeln!(out, "{} ({}): {}", group.stem, group.words.len(), words)?;
            }
        }
        OutputFormat::Json => write_json(out, groups, options)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    options: &OutputOptions,
) -> Result<()> {
    if options.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
