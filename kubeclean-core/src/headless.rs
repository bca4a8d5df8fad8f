// File: kubeclean-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper that runs the whole pipeline on a string: raw
//! substitution, parsing, per-resource cleaning and serialization.

use log::debug;

use crate::config::FilterOptions;
use crate::document::{parse_document, serialize_document};
use crate::engine::SanitizationEngine;
use crate::engines::field_engine::FieldEngine;
use crate::errors::KubecleanError;
use crate::orchestrator::sanitize_document;
use crate::sanitizers::substitution::{parse_substitutions, CompiledSubstitutions};

/// Cleans a YAML manifest held in a string.
///
/// Substitution rules are validated and compiled before the input is touched,
/// so a malformed rule fails without parsing anything.
///
/// # Arguments
///
/// * `input` - Raw YAML text, a single resource or a List.
/// * `substitutions` - `from=to` rules, applied to the raw text in order.
/// * `options` - Options for the field engine.
pub fn headless_clean_string<S: AsRef<str>>(
    input: &str,
    substitutions: &[S],
    options: FilterOptions,
) -> Result<String, KubecleanError> {
    let substitutions = parse_substitutions(substitutions)?;
    let engine = FieldEngine::new(options);
    clean_with_engine(&engine, &substitutions, input)
}

/// Runs substitution, parsing, cleaning and serialization with a given engine.
pub fn clean_with_engine(
    engine: &dyn SanitizationEngine,
    substitutions: &CompiledSubstitutions,
    input: &str,
) -> Result<String, KubecleanError> {
    let text = substitutions.apply(input);
    let document = parse_document(&text)?;
    let cleaned = sanitize_document(engine, &document);
    let output = serialize_document(&cleaned)?;
    debug!("Cleaned document serialized ({} bytes).", output.len());
    Ok(output)
}
