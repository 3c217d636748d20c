//! # Builder Configuration
//!
//! A builder is described by a YAML or JSON file naming the root element,
//! an optional batch root, the output indentation, and the schema itself:
//!
//! ```yaml
//! root_node: Invoice
//! batch_root_node: Invoices
//! indent: 4
//! schema:
//!   "@id": "/^[0-9]+$/"
//!   "?note": ""
//!   ":lines:line":
//!     sku: ""
//!     qty: "/^[0-9]+$/"
//! ```
//!
//! The schema is kept as a raw value here and compiled by
//! [`XmlBuilder::from_config`](crate::XmlBuilder::from_config).

use std::path::Path;

use docgen_core::DocgenError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::DEFAULT_INDENT;

/// Deserialized builder configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    /// Root element of every generated document.
    pub root_node: String,
    /// Element wrapping the documents of a batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_root_node: Option<String>,
    /// Spaces per nesting level; `0` writes one line.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Directive-encoded schema.
    pub schema: Value,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl BuilderConfig {
    /// Parse a configuration from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocgenError> {
        serde_json::from_value(value).map_err(|e| DocgenError::Load {
            path: "<inline>".to_string(),
            reason: format!("invalid builder configuration: {e}"),
        })
    }

    /// Load a configuration file (`.yaml`/`.yml` or JSON).
    pub fn load(path: &Path) -> Result<Self, DocgenError> {
        let value = docgen_core::load_value_file(path)?;
        serde_json::from_value(value).map_err(|e| DocgenError::Load {
            path: path.display().to_string(),
            reason: format!("invalid builder configuration: {e}"),
        })
    }
}
