//! Rule-definition resources.
//!
//! Rules are described as JSON documents made of named steps. Each step has
//! a minimum word size, an exception comparison mode and a list of rules:
//!
//! ```json
//! {
//!   "name": "orengo",
//!   "steps": [
//!     {
//!       "name": "pluralreduction",
//!       "min_word_size": 3,
//!       "exception_mode": "whole_word",
//!       "rules": [
//!         { "suffix": "ões", "min_stem_size": 3, "replacement": "ão", "exceptions": [] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Step properties are optional (`min_word_size` defaults to 0 and
//! `exception_mode` to `longest_suffix`). Rule `suffix`, `min_stem_size` and
//! `replacement` are mandatory, sizes may be given as numbers or numeric
//! strings. Any malformed rule makes the whole resource invalid.
//!
//! The default Orengo and Savoy resources are compiled into the crate.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, StemmerError};
use crate::rules::table::ExceptionMode;

/// Default Orengo (RSLP) rules.
pub const ORENGO_RULES: &str = include_str!("../../resources/orengo_rules.json");

/// Default Savoy rules.
pub const SAVOY_RULES: &str = include_str!("../../resources/savoy_rules.json");

/// A validated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDefinition {
    pub suffix: String,
    pub min_stem_size: usize,
    pub replacement: String,
    pub exceptions: Vec<String>,
}

/// A validated step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub name: String,
    pub min_word_size: usize,
    pub exception_mode: ExceptionMode,
    pub rules: Vec<RuleDefinition>,
}

/// A validated rule-definition resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub name: String,
    pub steps: Vec<StepDefinition>,
}

#[derive(Debug, Deserialize)]
struct RawRuleSet {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    min_word_size: Option<Value>,
    #[serde(default)]
    exception_mode: Option<Value>,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    suffix: Option<String>,
    #[serde(default)]
    min_stem_size: Option<Value>,
    #[serde(default)]
    replacement: Option<String>,
    #[serde(default)]
    exceptions: Vec<String>,
}

fn parse_size(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_exception_mode(step: &str, value: &Value) -> Result<ExceptionMode> {
    match value {
        Value::String(s) => match s.trim() {
            "whole_word" => Ok(ExceptionMode::WholeWord),
            "longest_suffix" => Ok(ExceptionMode::LongestSuffix),
            other => Err(StemmerError::config(format!(
                "unknown exception mode '{other}' in step '{step}'"
            ))),
        },
        // Numeric form: 1 compares the entire word, anything else the suffix.
        Value::Number(n) if n.as_u64() == Some(1) => Ok(ExceptionMode::WholeWord),
        Value::Number(_) => Ok(ExceptionMode::LongestSuffix),
        _ => Err(StemmerError::config(format!(
            "invalid exception mode in step '{step}'"
        ))),
    }
}

impl RawRule {
    fn validate(self, step: &str) -> Result<RuleDefinition> {
        let suffix = self
            .suffix
            .ok_or_else(|| StemmerError::invalid_rule(step, "missing suffix"))?;
        if suffix.is_empty() {
            return Err(StemmerError::invalid_rule(step, "empty suffix"));
        }

        let min_stem_size = self
            .min_stem_size
            .as_ref()
            .ok_or_else(|| {
                StemmerError::invalid_rule(step, format!("missing size for suffix '{suffix}'"))
            })
            .and_then(|value| {
                parse_size(value).ok_or_else(|| {
                    let reason = format!("invalid size {value} for suffix '{suffix}'");
                    StemmerError::invalid_rule(step, reason)
                })
            })?;

        let replacement = self.replacement.ok_or_else(|| {
            StemmerError::invalid_rule(step, format!("missing replacement for suffix '{suffix}'"))
        })?;

        Ok(RuleDefinition {
            suffix,
            min_stem_size,
            replacement,
            exceptions: self.exceptions,
        })
    }
}

impl RawStep {
    fn validate(self) -> Result<StepDefinition> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(StemmerError::config("step without a name")),
        };

        let min_word_size = match &self.min_word_size {
            Some(value) => parse_size(value).ok_or_else(|| {
                StemmerError::config(format!("invalid min_word_size {value} in step '{name}'"))
            })?,
            None => 0,
        };

        let exception_mode = match &self.exception_mode {
            Some(value) => parse_exception_mode(&name, value)?,
            None => ExceptionMode::default(),
        };

        let rules = self
            .rules
            .into_iter()
            .map(|rule| rule.validate(&name))
            .collect::<Result<Vec<_>>>()?;

        Ok(StepDefinition {
            name,
            min_word_size,
            exception_mode,
            rules,
        })
    }
}

impl RuleSet {
    /// Parse and validate a JSON rule-definition resource.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawRuleSet = serde_json::from_str(json)?;
        let steps = raw
            .steps
            .into_iter()
            .map(RawStep::validate)
            .collect::<Result<Vec<_>>>()?;

        let set = RuleSet {
            name: raw.name.unwrap_or_default(),
            steps,
        };
        debug!(
            "loaded rule set '{}' with {} steps and {} rules",
            set.name,
            set.steps.len(),
            set.rule_count()
        );
        Ok(set)
    }

    /// Read a JSON rule-definition resource from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// The default Orengo (RSLP) rules.
    pub fn orengo() -> Result<Self> {
        Self::from_json_str(ORENGO_RULES)
    }

    /// The default Savoy rules.
    pub fn savoy() -> Result<Self> {
        Self::from_json_str(SAVOY_RULES)
    }

    /// Get a step by name. When a name appears twice the later step wins.
    pub fn step(&self, name: &str) -> Option<&StepDefinition> {
        self.steps.iter().rev().find(|step| step.name == name)
    }

    /// Get a step the given algorithm cannot run without.
    pub fn require_step(&self, algorithm: &str, name: &str) -> Result<&StepDefinition> {
        self.step(name)
            .ok_or_else(|| StemmerError::missing_step(algorithm, name))
    }

    /// Total number of rules across all steps.
    pub fn rule_count(&self) -> usize {
        self.steps.iter().map(|step| step.rules.len()).sum()
    }
}
