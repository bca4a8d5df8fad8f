//! Clean command implementation: stdin manifest in, cleaned manifest out.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{Read, Write};

use kubeclean_core::{clean_with_engine, parse_substitutions, FieldEngine, FilterOptions};

use crate::cli::Cli;

/// Options for a single clean run.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub replace_raw: Vec<String>,
    pub namespace: Option<String>,
    pub remove_cattle: bool,
}

impl From<&Cli> for CleanOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            replace_raw: cli.replace_raw.clone(),
            namespace: cli.namespace.clone(),
            remove_cattle: cli.remove_cattle,
        }
    }
}

/// Reads the whole manifest from `reader` as UTF-8.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    debug!("Reading input from stdin...");
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read manifest from stdin")?;
    debug!("Read {} bytes of input.", input.len());
    Ok(input)
}

/// The main operation runner for the kubeclean CLI.
///
/// Substitution rules are checked before any input is read. Nothing is
/// written unless the whole document was cleaned successfully.
pub fn run_clean<R: Read, W: Write>(opts: &CleanOptions, reader: R, mut writer: W) -> Result<()> {
    info!("Starting kubeclean operation.");

    let substitutions = parse_substitutions(&opts.replace_raw)?;
    debug!("{} raw substitutions ready.", substitutions.rules.len());

    if let Some(namespace) = &opts.namespace {
        warn!("--namespace '{}' has no effect; namespace rewriting is not implemented.", namespace);
    }

    let input = read_input(reader)?;

    let engine = FieldEngine::new(FilterOptions {
        remove_vendor_metadata: opts.remove_cattle,
    });
    let cleaned = clean_with_engine(&engine, &substitutions, &input)
        .context("Failed to clean manifest")?;

    debug!("Writing cleaned manifest to stdout.");
    writeln!(writer, "{}", cleaned).context("Failed to write cleaned manifest")?;
    writer.flush().context("Failed to flush output")?;

    info!("kubeclean operation completed.");
    Ok(())
}
