// kubeclean-core/src/lib.rs
//! # kubeclean Core Library
//!
//! `kubeclean-core` holds the logic that turns a Kubernetes manifest captured
//! from a live cluster (`kubectl get -o yaml`) into one that can be re-applied
//! elsewhere or committed: server-generated fields are removed, values left
//! empty are pruned, and optional regex substitutions are applied to the raw
//! text before it is parsed.
//!
//! The library does no I/O of its own; it works on strings and on
//! `serde_yaml::Value` trees.
//!
//! ## Modules
//!
//! * `config`: The field removal [`RuleSet`] and per-run [`FilterOptions`].
//! * `sanitizers`: Raw text substitution, field stripping and empty-value pruning.
//! * `engine`: The [`SanitizationEngine`] trait for cleaning one resource.
//! * `engines`: Concrete engines; [`FieldEngine`] is the rule-driven one.
//! * `orchestrator`: Applies an engine to a single resource or to every item of a List.
//! * `document`: YAML parsing and serialization.
//! * `headless`: One-shot text-to-text cleaning.
//! * `errors`: The [`KubecleanError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use kubeclean_core::{headless_clean_string, FilterOptions};
//!
//! let input = "kind: Service\nspec:\n  clusterIP: 10.0.0.1\nstatus:\n  phase: Active\n";
//! let output = headless_clean_string(input, &["foo=bar"], FilterOptions::default()).unwrap();
//! assert_eq!(output, "kind: Service\n");
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod document;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod orchestrator;
pub mod sanitizers;

/// Re-exports the field rule types.
pub use config::{validate_rules, FieldRule, FilterOptions, RuleSet};

/// Re-exports the custom error type for clear error reporting.
pub use errors::KubecleanError;

pub use engine::SanitizationEngine;
pub use engines::field_engine::FieldEngine;

pub use document::{parse_document, serialize_document};
pub use orchestrator::{is_list_document, sanitize_document};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{clean_with_engine, headless_clean_string};

pub use sanitizers::fields::{remove_path, strip_fields};
pub use sanitizers::pruner::{prune_empty, prune_mapping};
pub use sanitizers::substitution::{
    compile_substitutions, parse_substitutions, CompiledSubstitution, CompiledSubstitutions,
    SubstitutionRule,
};
