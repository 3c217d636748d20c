//! # Key Directive Parser
//!
//! Schema keys carry a one-character directive prefix:
//!
//! | Prefix | Directive | Residual |
//! |---|---|---|
//! | `?` | optional, elided when the data is absent or empty | parsed again |
//! | `@` | attribute | attribute name |
//! | `:` | record list | `container:item` |
//! | none | element | element name |
//!
//! The optional marker is checked first, then the element kind. Each key is
//! parsed once when the schema is loaded.

use std::fmt;

use docgen_core::SchemaStructureError;

/// What a schema key produces in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// A child element named after the key.
    Element(String),
    /// An attribute on the current element.
    Attribute(String),
    /// A `container` element holding one `item` element per data record.
    RecordList {
        /// Data path of the list and name of the wrapping element.
        container: String,
        /// Name of the element created for each record.
        item: String,
    },
}

/// A parsed schema key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaKey {
    raw: String,
    optional: bool,
    directive: Directive,
}

impl SchemaKey {
    /// Parse a raw schema key.
    ///
    /// # Errors
    ///
    /// Returns `SchemaStructureError::EmptyKey` if the key or its residual
    /// name is empty, `RepeatedOptional` for `??name`, and
    /// `MalformedRecordListKey` unless a `:` key splits into exactly two
    /// non-empty segments.
    pub fn parse(raw: &str) -> Result<Self, SchemaStructureError> {
        let empty = || SchemaStructureError::EmptyKey {
            key: raw.to_string(),
        };

        let (optional, rest) = match raw.strip_prefix('?') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if rest.starts_with('?') {
            return Err(SchemaStructureError::RepeatedOptional {
                key: raw.to_string(),
            });
        }

        let directive = if let Some(name) = rest.strip_prefix('@') {
            Directive::Attribute(name.to_string())
        } else if let Some(names) = rest.strip_prefix(':') {
            let parts: Vec<&str> = names.split(':').collect();
            match parts.as_slice() {
                [container, item] if !container.is_empty() && !item.is_empty() => {
                    Directive::RecordList {
                        container: container.to_string(),
                        item: item.to_string(),
                    }
                }
                _ => {
                    return Err(SchemaStructureError::MalformedRecordListKey {
                        key: raw.to_string(),
                        segments: parts.len(),
                    })
                }
            }
        } else {
            Directive::Element(rest.to_string())
        };

        match &directive {
            Directive::Element(name) | Directive::Attribute(name) if name.is_empty() => {
                Err(empty())
            }
            _ => Ok(Self {
                raw: raw.to_string(),
                optional,
                directive,
            }),
        }
    }

    /// The key exactly as written in the schema.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True for `?`-prefixed keys.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The output directive.
    pub fn directive(&self) -> &Directive {
        &self.directive
    }

    /// Data-bag path read for this key, and checked for optional elision.
    pub fn data_path(&self) -> &str {
        match &self.directive {
            Directive::Element(name) | Directive::Attribute(name) => name,
            Directive::RecordList { container, .. } => container,
        }
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
