//! # Typed Schema
//!
//! A schema is written as a mapping from directive-encoded keys to either a
//! rule string or a nested mapping. Loading turns that untyped tree into a
//! [`Schema`]: every key parsed into a [`SchemaKey`], every rule compiled,
//! every value classified as [`SchemaNode::Rule`] or [`SchemaNode::Node`].
//! All structural errors surface here, before any data is seen.
//!
//! Entry order is the declared order of the source mapping and is the order
//! in which the walker emits output.

use std::path::Path;

use docgen_core::error::json_type_name;
use docgen_core::{DocgenError, SchemaStructureError};
use serde_json::Value;

use crate::key::{Directive, SchemaKey};
use crate::rule::Rule;

/// Value side of a schema entry.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// Scalar leaf or attribute with its validation rule.
    Rule(Rule),
    /// Nested schema for a structured element or record list.
    Node(Schema),
}

/// One key/value pair of a schema.
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    /// Parsed key.
    pub key: SchemaKey,
    /// Rule or nested schema.
    pub node: SchemaNode,
}

/// A compiled schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    /// Compile a schema from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaStructureError` naming the first malformed key or
    /// value.
    pub fn from_value(value: &Value) -> Result<Self, SchemaStructureError> {
        let map = value
            .as_object()
            .ok_or_else(|| SchemaStructureError::NotAMapping {
                found: json_type_name(value),
            })?;

        let mut entries = Vec::with_capacity(map.len());
        for (raw, value) in map {
            let key = SchemaKey::parse(raw)?;
            let node = match value {
                Value::String(text) => SchemaNode::Rule(Rule::parse(raw, text)?),
                Value::Object(_) => SchemaNode::Node(Self::from_value(value)?),
                other => {
                    return Err(SchemaStructureError::UnexpectedValue {
                        key: raw.clone(),
                        found: json_type_name(other),
                    })
                }
            };
            check_pairing(&key, &node)?;
            entries.push(SchemaEntry { key, node });
        }

        Ok(Self { entries })
    }

    /// Compile a schema from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, DocgenError> {
        let value: Value = serde_json::from_str(content).map_err(|e| DocgenError::Load {
            path: "<inline>".to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;
        Ok(Self::from_value(&value)?)
    }

    /// Compile a schema from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, DocgenError> {
        let value = docgen_core::parse_yaml(content).map_err(|reason| DocgenError::Load {
            path: "<inline>".to_string(),
            reason,
        })?;
        Ok(Self::from_value(&value)?)
    }

    /// Load and compile a schema file (`.yaml`/`.yml` or JSON).
    pub fn load(path: &Path) -> Result<Self, DocgenError> {
        let value = docgen_core::load_value_file(path)?;
        Ok(Self::from_value(&value)?)
    }

    /// Entries in declared order.
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the schema has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry counts across the whole tree, nested schemas included.
    pub fn stats(&self) -> SchemaStats {
        let mut stats = SchemaStats::default();
        self.collect_stats(&mut stats, 1);
        stats
    }

    fn collect_stats(&self, stats: &mut SchemaStats, depth: usize) {
        stats.depth = stats.depth.max(depth);
        for entry in &self.entries {
            if entry.key.is_optional() {
                stats.optional += 1;
            }
            match entry.key.directive() {
                Directive::Attribute(_) => stats.attributes += 1,
                Directive::RecordList { .. } => stats.record_lists += 1,
                Directive::Element(_) => stats.elements += 1,
            }
            if let SchemaNode::Node(nested) = &entry.node {
                nested.collect_stats(stats, depth + 1);
            }
        }
    }
}

/// Entry counts produced by [`Schema::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaStats {
    /// Element entries, leaf and structured.
    pub elements: usize,
    /// Attribute entries.
    pub attributes: usize,
    /// Record-list entries.
    pub record_lists: usize,
    /// Entries marked optional.
    pub optional: usize,
    /// Deepest nesting level, the top level being 1.
    pub depth: usize,
}

fn check_pairing(key: &SchemaKey, node: &SchemaNode) -> Result<(), SchemaStructureError> {
    let reason = match (key.directive(), node) {
        (Directive::Attribute(_), SchemaNode::Node(_)) => "attribute requires a rule string",
        (Directive::RecordList { .. }, SchemaNode::Rule(_)) => "record list requires a nested schema",
        _ => return Ok(()),
    };
    Err(SchemaStructureError::DirectiveMismatch {
        key: key.raw().to_string(),
        reason,
    })
}
