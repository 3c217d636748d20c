//! # Value Validator
//!
//! Every scalar leaf and attribute in a schema carries a rule string:
//!
//! | Rule | Meaning |
//! |---|---|
//! | `""` | no validation |
//! | `/regex/` | the value must be consumed entirely by the pattern's matches |
//! | `a\|b\|c` | the value must be one of the alternatives, otherwise it becomes `a` |
//!
//! The enumeration form normalizes to a default rather than rejecting:
//! an unknown value is silently replaced by the first alternative.
//!
//! Rules are compiled once when the schema is loaded. [`validate`] is the
//! one-shot form that compiles on every call.

use std::fmt;

use docgen_core::{SchemaStructureError, ValidationError};
use regex::Regex;

/// A compiled validation rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Empty rule: every value passes unchanged.
    Any,
    /// `/pattern/` rule.
    Pattern(Regex),
    /// `a|b|c` rule. Never empty.
    OneOf(Vec<String>),
}

impl Rule {
    /// Compile a rule string. `key` is only used for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `SchemaStructureError::InvalidPattern` if a `/regex/` rule
    /// does not compile.
    pub fn parse(key: &str, text: &str) -> Result<Self, SchemaStructureError> {
        if text.is_empty() {
            return Ok(Self::Any);
        }

        if text.starts_with('/') {
            let pattern = text.trim_matches('/');
            return Regex::new(pattern).map(Self::Pattern).map_err(|e| {
                SchemaStructureError::InvalidPattern {
                    key: key.to_string(),
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                }
            });
        }

        Ok(Self::OneOf(text.split('|').map(str::to_string).collect()))
    }

    /// Resolve the final value for `candidate`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PatternMismatch` when a pattern rule leaves
    /// part of the value unmatched. Enumeration rules never fail.
    pub fn apply(&self, key: &str, candidate: &str) -> Result<String, ValidationError> {
        match self {
            Self::Any => Ok(candidate.to_string()),
            Self::Pattern(regex) => {
                if regex.replace_all(candidate, "").is_empty() {
                    Ok(candidate.to_string())
                } else {
                    Err(ValidationError::PatternMismatch {
                        key: key.to_string(),
                        value: candidate.to_string(),
                        pattern: regex.as_str().to_string(),
                    })
                }
            }
            Self::OneOf(alternatives) => {
                if alternatives.iter().any(|a| a == candidate) {
                    return Ok(candidate.to_string());
                }
                let default = alternatives.first().map(String::as_str).unwrap_or_default();
                tracing::debug!(
                    key,
                    value = candidate,
                    default,
                    "value not in enumeration; substituting default"
                );
                Ok(default.to_string())
            }
        }
    }

    /// True for the empty rule.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => Ok(()),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
            Self::OneOf(alternatives) => f.write_str(&alternatives.join("|")),
        }
    }
}

/// Compile `rule` and apply it to `candidate` in one step.
///
/// # Errors
///
/// Returns a schema structure error for an uncompilable pattern and a
/// validation error for a value the pattern rejects.
pub fn validate(rule: &str, key: &str, candidate: &str) -> Result<String, docgen_core::DocgenError> {
    Ok(Rule::parse(key, rule)?.apply(key, candidate)?)
}
