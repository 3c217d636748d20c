//! # XML Builder
//!
//! Entry point of the generator. An [`XmlBuilder`] is configured once with
//! a root element name and a compiled [`Schema`], then turns any number of
//! data bags into documents. Each call gets its own [`Document`]; the
//! builder itself is never mutated, so it can be shared across threads.
//!
//! On error nothing is returned but the error: a half-built tree never
//! escapes.

use docgen_core::{DataSource, DocgenError, Document, JsonData, OutputTree};
use serde_json::Value;

use crate::config::BuilderConfig;
use crate::schema::Schema;
use crate::walker::walk;

/// Default indentation, in spaces, of serialized documents.
pub const DEFAULT_INDENT: usize = 4;

/// Builds XML documents from a schema and data bags.
#[derive(Debug, Clone)]
pub struct XmlBuilder {
    root_node: String,
    batch_root_node: Option<String>,
    indent: usize,
    schema: Schema,
}

impl XmlBuilder {
    /// Create a builder producing `<root_node>` documents.
    pub fn new(root_node: impl Into<String>, schema: Schema) -> Self {
        Self {
            root_node: root_node.into(),
            batch_root_node: None,
            indent: DEFAULT_INDENT,
            schema,
        }
    }

    /// Create a builder from a loaded configuration file.
    ///
    /// # Errors
    ///
    /// Returns a schema structure error if the configured schema is malformed,
    /// and `DocgenError::Config` for an empty root or batch root name.
    pub fn from_config(config: BuilderConfig) -> Result<Self, DocgenError> {
        if config.root_node.is_empty() {
            return Err(DocgenError::Config("root_node must not be empty".to_string()));
        }
        if config.batch_root_node.as_deref() == Some("") {
            return Err(DocgenError::Config(
                "batch_root_node must not be empty when set".to_string(),
            ));
        }
        let schema = Schema::from_value(&config.schema)?;
        Ok(Self {
            root_node: config.root_node,
            batch_root_node: config.batch_root_node,
            indent: config.indent,
            schema,
        })
    }

    /// Element wrapping the documents of a batch.
    pub fn with_batch_root(mut self, batch_root_node: impl Into<String>) -> Self {
        self.batch_root_node = Some(batch_root_node.into());
        self
    }

    /// Spaces per nesting level in serialized output; `0` for one line.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Root element name.
    pub fn root_node(&self) -> &str {
        &self.root_node
    }

    /// Batch root element name, if configured.
    pub fn batch_root_node(&self) -> Option<&str> {
        self.batch_root_node.as_deref()
    }

    /// Serialization indentation.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The compiled schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Build the output tree for one data bag.
    ///
    /// # Errors
    ///
    /// Returns the first validation error raised by the walk.
    pub fn build<D: DataSource>(&self, data: &D) -> Result<Document, DocgenError> {
        let mut doc = Document::new(&self.root_node);
        let root = doc.root();
        walk(&self.schema, data, &mut doc, root)?;
        tracing::debug!(root = %self.root_node, elements = doc.len(), "document built");
        Ok(doc)
    }

    /// Build and serialize the document for one data bag.
    pub fn process<D: DataSource>(&self, data: &D) -> Result<String, DocgenError> {
        Ok(self.build(data)?.to_xml(self.indent)?)
    }

    /// [`process`](Self::process) over a JSON value.
    pub fn process_value(&self, data: &Value) -> Result<String, DocgenError> {
        self.process(&JsonData::new(data))
    }

    /// Build one `<batch_root_node>` holding a `<root_node>` per record.
    ///
    /// # Errors
    ///
    /// Returns `DocgenError::Config` when no batch root is configured, and
    /// otherwise the first validation error from any record.
    pub fn build_batch<D: DataSource>(&self, records: &[D]) -> Result<Document, DocgenError> {
        let batch_root = self.batch_root_node.as_deref().ok_or_else(|| {
            DocgenError::Config("batch processing requires batch_root_node".to_string())
        })?;

        let mut doc = Document::new(batch_root);
        let batch = doc.root();
        for (index, record) in records.iter().enumerate() {
            let root = doc.create_element(batch, &self.root_node);
            walk(&self.schema, record, &mut doc, root).map_err(|e| {
                tracing::debug!(index, error = %e, "batch record rejected");
                e
            })?;
        }
        tracing::debug!(batch_root, records = records.len(), "batch built");
        Ok(doc)
    }

    /// Build and serialize a batch.
    pub fn process_batch<D: DataSource>(&self, records: &[D]) -> Result<String, DocgenError> {
        Ok(self.build_batch(records)?.to_xml(self.indent)?)
    }

    /// [`process_batch`](Self::process_batch) over JSON values.
    pub fn process_batch_values(&self, records: &[Value]) -> Result<String, DocgenError> {
        let records: Vec<JsonData<'_>> = records.iter().map(JsonData::new).collect();
        self.process_batch(&records)
    }
}
