//! # docgen-cli — docgen Command-Line Interface
//!
//! ## Subcommands
//!
//! - `render` — Render an XML document (or a batch) from a builder
//!   configuration and a data file.
//! - `check` — Compile a builder configuration's schema and summarize it.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `docgen-schema`; no schema logic here.

pub mod check;
pub mod render;
