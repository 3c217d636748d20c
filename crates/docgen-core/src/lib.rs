//! # docgen-core — Foundational Types for docgen
//!
//! This crate defines the two capabilities the schema walker consumes and
//! the error hierarchy every other docgen crate reports through. It depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Data access by path.** [`DataSource`] answers `has`, `get_string`,
//!    `get_record` and `get_record_list` for dot/index paths. Input data is
//!    never traversed up front.
//!
//! 2. **Output through a capability.** [`OutputTree`] is the only way the
//!    walker touches its output. [`Document`] is the in-memory
//!    implementation and owns serialization.
//!
//! 3. **One error type at the top.** [`DocgenError`] wraps schema structure,
//!    validation, and document errors so a single `?` carries any of them to
//!    the caller.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `docgen-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod data;
pub mod document;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use data::{load_value_file, parse_yaml, resolve_path, yaml_to_json_value, DataSource, JsonData};
pub use document::{Document, Element, NodeId, OutputTree};
pub use error::{DocgenError, DocumentError, SchemaStructureError, ValidationError};
