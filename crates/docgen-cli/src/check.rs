//! # Check Subcommand
//!
//! Loads a builder configuration and compiles its schema without touching
//! any data. Every structural problem a schema can have (malformed record
//! list keys, non-string leaves, uncompilable patterns, directive
//! mismatches) is reported here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docgen_schema::{BuilderConfig, SchemaStats, XmlBuilder};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Builder configuration file (YAML or JSON).
    #[arg(long, short)]
    pub config: PathBuf,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let report = check(args)?;
    println!("{report}");
    Ok(0)
}

/// Compile the configured schema and describe it.
pub fn check(args: &CheckArgs) -> Result<String> {
    let config = BuilderConfig::load(&args.config)
        .with_context(|| format!("loading builder configuration {}", args.config.display()))?;
    let builder = XmlBuilder::from_config(config)
        .with_context(|| format!("compiling schema in {}", args.config.display()))?;

    let stats = builder.schema().stats();
    tracing::debug!(?stats, "schema compiled");
    Ok(summary(&builder, &stats))
}

fn summary(builder: &XmlBuilder, stats: &SchemaStats) -> String {
    let batch = builder.batch_root_node().unwrap_or("-");
    format!(
        "schema OK\n  root:         {}\n  batch root:   {batch}\n  elements:     {}\n  attributes:   {}\n  record lists: {}\n  optional:     {}\n  depth:        {}",
        builder.root_node(),
        stats.elements,
        stats.attributes,
        stats.record_lists,
        stats.optional,
        stats.depth,
    )
}
