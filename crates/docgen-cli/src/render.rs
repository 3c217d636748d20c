//! # Render Subcommand
//!
//! Loads a builder configuration and a data file, runs the schema walk, and
//! prints the resulting XML or writes it to `--out`.
//!
//! ```bash
//! docgen render --config invoice.yaml --data invoice-7.json
//! docgen render --config invoice.yaml --data invoices.yaml --batch --out batch.xml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docgen_core::load_value_file;
use docgen_schema::{BuilderConfig, XmlBuilder};

/// Arguments for the render subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Builder configuration file (YAML or JSON).
    #[arg(long, short)]
    pub config: PathBuf,

    /// Data file (YAML or JSON).
    #[arg(long, short)]
    pub data: PathBuf,

    /// Treat the data file as a list of records and wrap the documents in
    /// the configured batch root.
    #[arg(long)]
    pub batch: bool,

    /// Override the configured indentation (0 writes one line).
    #[arg(long)]
    pub indent: Option<usize>,

    /// Write the document here instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Execute the render subcommand.
pub fn run_render(args: &RenderArgs) -> Result<u8> {
    let xml = render(args)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{xml}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), bytes = xml.len(), "document written");
        }
        None => println!("{xml}"),
    }
    Ok(0)
}

/// Produce the serialized document described by `args`.
pub fn render(args: &RenderArgs) -> Result<String> {
    let config = BuilderConfig::load(&args.config)
        .with_context(|| format!("loading builder configuration {}", args.config.display()))?;
    let mut builder = XmlBuilder::from_config(config)
        .with_context(|| format!("compiling schema in {}", args.config.display()))?;
    if let Some(indent) = args.indent {
        builder = builder.with_indent(indent);
    }

    let data = load_value_file(&args.data)
        .with_context(|| format!("loading data {}", args.data.display()))?;
    tracing::debug!(data = %args.data.display(), batch = args.batch, "rendering");

    let xml = if args.batch {
        let records = data
            .as_array()
            .context("--batch requires the data file to hold a list of records")?;
        builder.process_batch_values(records)?
    } else {
        builder.process_value(&data)?
    };
    Ok(xml)
}
