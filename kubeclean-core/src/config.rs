//! Configuration management for `kubeclean-core`.
//!
//! This module defines the field removal rules applied to every resource and the
//! options that accompany a sanitization run. The built-in rule table ships as an
//! embedded YAML file and is parsed, validated and cached on first use.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::KubecleanError;

/// A single field removal rule.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldRule {
    /// Unique identifier for the rule (e.g., "metadata_uid").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// Only apply the rule to documents whose `kind` equals this value.
    pub kind: Option<String>,
    /// Key segments leading from the document root to the field to delete.
    pub path: Vec<String>,
}

impl FieldRule {
    /// Returns true if this rule should run against a document of the given kind.
    pub fn applies_to(&self, kind: Option<&str>) -> bool {
        match &self.kind {
            Some(required) => kind == Some(required.as_str()),
            None => true,
        }
    }
}

/// The full set of field removal rules.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleSet {
    pub rules: Vec<FieldRule>,
}

/// Per-run options handed to the field sanitizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Remove metadata injected by Rancher and similar tooling.
    ///
    /// Accepted for compatibility; the vendor annotations in the default rule
    /// set are removed regardless of this flag.
    pub remove_vendor_metadata: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            remove_vendor_metadata: true,
        }
    }
}

lazy_static! {
    static ref DEFAULT_RULES: RuleSet = parse_default_rules()
        .expect("embedded default_rules.yaml must be valid");
}

fn parse_default_rules() -> Result<RuleSet> {
    debug!("Loading default rules from embedded string...");
    let rule_set = RuleSet::from_yaml_str(include_str!("../config/default_rules.yaml"))
        .context("Failed to parse default rules")?;
    debug!("Loaded {} default rules.", rule_set.rules.len());
    Ok(rule_set)
}

impl RuleSet {
    /// Returns the built-in rule set.
    pub fn load_default_rules() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    /// Parses and validates a rule set from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, KubecleanError> {
        let rule_set: RuleSet = serde_yaml::from_str(text)?;
        validate_rules(&rule_set.rules)?;
        Ok(rule_set)
    }

    /// Rules that apply to a document of the given kind, in table order.
    pub fn rules_for_kind<'a>(&'a self, kind: Option<&'a str>) -> impl Iterator<Item = &'a FieldRule> + 'a {
        self.rules.iter().filter(move |rule| rule.applies_to(kind))
    }
}

/// Checks rule integrity: names present and unique, paths non-empty.
pub fn validate_rules(rules: &[FieldRule]) -> Result<(), KubecleanError> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.path.is_empty() {
            errors.push(format!("Rule '{}' has an empty `path`.", rule.name));
        } else if rule.path.iter().any(|segment| segment.is_empty()) {
            errors.push(format!("Rule '{}' has an empty path segment.", rule.name));
        }

        if let Some(kind) = &rule.kind {
            if kind.trim().is_empty() {
                errors.push(format!("Rule '{}' has an empty `kind` filter.", rule.name));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(KubecleanError::RuleValidation(errors.join("\n")))
    }
}
