//! # Output Document
//!
//! The walker builds its output through the [`OutputTree`] capability:
//! create a child element, set an attribute, set element text. Nothing is
//! ever revisited once a subtree is finished.
//!
//! [`Document`] is the in-memory implementation. Elements live in an arena
//! and are addressed by [`NodeId`] handles. Serialization goes through
//! `quick-xml`'s `Writer`, which handles escaping and indentation.
//!
//! ## Serialized Form
//!
//! - No XML declaration is written.
//! - An element with neither text nor children is written self-closing.
//! - Text is written inline: `<name>value</name>`.
//! - Attributes appear in insertion order.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::DocumentError;

/// Output tree capability consumed by the schema walker.
pub trait OutputTree {
    /// Handle to an element of the tree.
    type Node: Copy;

    /// The root element.
    fn root(&self) -> Self::Node;

    /// Append a new child element and return its handle.
    fn create_element(&mut self, parent: Self::Node, name: &str) -> Self::Node;

    /// Set an attribute on an element.
    fn create_attribute(&mut self, parent: Self::Node, name: &str, value: &str);

    /// Set the text content of an element.
    fn set_text(&mut self, element: Self::Node, value: &str);
}

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of a named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content, if any was set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child element handles in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// In-memory XML element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    /// Create a document with a single root element.
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![Element::new(root_name)],
        }
    }

    /// Look up an element by handle.
    ///
    /// Handles are only produced by this document, so lookups never miss.
    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    /// The root element.
    pub fn root_element(&self) -> &Element {
        &self.nodes[0]
    }

    /// Total number of elements, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a document has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child elements of `id` with the given name, in order.
    pub fn children_named<'a>(
        &'a self,
        id: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.element(id)
            .children
            .iter()
            .copied()
            .filter(move |c| self.element(*c).name == name)
    }

    /// First child element of `id` with the given name.
    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children_named(id, name).next()
    }

    /// Serialize to XML text.
    ///
    /// `indent` is the number of spaces per nesting level; `0` writes the
    /// whole document on one line.
    pub fn to_xml(&self, indent: usize) -> Result<String, DocumentError> {
        let mut writer = if indent == 0 {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), b' ', indent)
        };
        self.write_element(&mut writer, self.root())?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_element(&self, writer: &mut Writer<Vec<u8>>, id: NodeId) -> Result<(), DocumentError> {
        let element = self.element(id);
        let mut start = BytesStart::new(element.name.as_str());
        for (key, value) in &element.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        let text = element.text.as_deref().filter(|t| !t.is_empty());
        if text.is_none() && element.children.is_empty() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        if let Some(text) = text {
            write_event(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &element.children {
            self.write_element(writer, *child)?;
        }
        write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Write(e.to_string()))
}

impl OutputTree for Document {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn create_element(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(name));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn create_attribute(&mut self, parent: NodeId, name: &str, value: &str) {
        let attributes = &mut self.nodes[parent.0].attributes;
        match attributes.iter_mut().find(|(k, _)| k == name) {
            Some(existing) => existing.1 = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn set_text(&mut self, element: NodeId, value: &str) {
        self.nodes[element.0].text = Some(value.to_string());
    }
}
