//! Rule definitions and the rule tables compiled from them.
//!
//! A rule-definition resource ([`definition::RuleSet`]) lists named steps,
//! each holding `(suffix, min_stem_size, replacement, exceptions)` rules.
//! Stemmers compile the steps they need into [`table::RuleTable`]s once at
//! construction time and only read them afterwards.

pub mod definition;
pub mod table;

pub use definition::{RuleDefinition, RuleSet, StepDefinition};
pub use table::{ExceptionMode, Exceptions, LengthGuard, Rule, RuleTable};
