// kubeclean-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! An engine turns one parsed resource into its cleaned form. The orchestrator
//! only talks to this trait, so it does not care how fields are chosen for
//! removal.
//!
//! License: MIT OR APACHE 2.0

use serde_yaml::Value;

use crate::config::{FilterOptions, RuleSet};

/// Cleans a single Kubernetes resource.
pub trait SanitizationEngine: Send + Sync {
    /// Returns a cleaned copy of `resource`.
    ///
    /// Must not fail and must not modify its input. A null resource is returned
    /// as null.
    fn sanitize_resource(&self, resource: &Value) -> Value;

    /// Returns the field rules the engine applies.
    fn get_rules(&self) -> &RuleSet;

    /// Returns the engine's options.
    fn get_options(&self) -> &FilterOptions;
}
