//! # docgen-schema — Schema-Driven Document Generation
//!
//! Interprets a compact schema DSL and walks it against a data bag to
//! produce an XML document.
//!
//! ## Schema DSL
//!
//! Keys carry directives ([`key`]), values are either a rule string
//! ([`rule`]) or a nested schema:
//!
//! ```yaml
//! "@id": "/^[0-9]+$/"          # attribute, must be digits
//! "?note": ""                  # optional element, elided when empty
//! status: "draft|final"        # unknown values become "draft"
//! customer:                    # nested element
//!   name: ""
//! ":lines:line":               # <lines> with one <line> per record
//!   sku: ""
//! ```
//!
//! ## Pipeline
//!
//! 1. [`Schema::from_value`] parses every key and compiles every rule once.
//!    All structural errors are reported here.
//! 2. [`XmlBuilder::process`] walks the schema ([`walker::walk`]) against a
//!    [`docgen_core::DataSource`] into a fresh [`docgen_core::Document`].
//! 3. The document is serialized only if the walk succeeded.
//!
//! ## Crate Policy
//!
//! - Depends only on `docgen-core` internally.
//! - The first error aborts a walk; no partial document is returned.
//! - Enumeration rules normalize unknown values to their first alternative
//!   instead of failing.

pub mod builder;
pub mod config;
pub mod key;
pub mod rule;
pub mod schema;
pub mod walker;

pub use builder::{XmlBuilder, DEFAULT_INDENT};
pub use config::BuilderConfig;
pub use key::{Directive, SchemaKey};
pub use rule::{validate, Rule};
pub use schema::{Schema, SchemaEntry, SchemaNode, SchemaStats};
pub use walker::walk;
