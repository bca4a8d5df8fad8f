//! A `SanitizationEngine` implementation that removes fields listed in a
//! [`RuleSet`] and then prunes values left empty.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::debug;
use serde_yaml::Value;

use crate::config::{FilterOptions, RuleSet};
use crate::engine::SanitizationEngine;
use crate::sanitizers::fields::strip_fields;
use crate::sanitizers::pruner::prune_empty;

#[derive(Debug)]
pub struct FieldEngine {
    rules: Cow<'static, RuleSet>,
    options: FilterOptions,
}

impl FieldEngine {
    /// Engine over the built-in rule set.
    pub fn new(options: FilterOptions) -> Self {
        Self::build(Cow::Borrowed(RuleSet::load_default_rules()), options)
    }

    /// Engine over a caller-supplied rule set.
    pub fn with_rules(rules: RuleSet, options: FilterOptions) -> Self {
        Self::build(Cow::Owned(rules), options)
    }

    fn build(rules: Cow<'static, RuleSet>, options: FilterOptions) -> Self {
        debug!(
            "FieldEngine ready with {} rules (remove_vendor_metadata: {}).",
            rules.rules.len(),
            options.remove_vendor_metadata
        );
        Self { rules, options }
    }
}

impl Default for FieldEngine {
    fn default() -> Self {
        Self::new(FilterOptions::default())
    }
}

impl SanitizationEngine for FieldEngine {
    fn sanitize_resource(&self, resource: &Value) -> Value {
        if resource.is_null() {
            return Value::Null;
        }
        let stripped = strip_fields(resource, &self.rules, &self.options);
        prune_empty(&stripped)
    }

    fn get_rules(&self) -> &RuleSet { &self.rules }
    fn get_options(&self) -> &FilterOptions { &self.options }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_service_example_collapses_to_kind() {
        let engine = FieldEngine::default();
        let input = yaml("kind: Service\nspec:\n  clusterIP: 10.0.0.1\nstatus:\n  phase: Active\n");
        assert_eq!(engine.sanitize_resource(&input), yaml("kind: Service\n"));
    }

    #[test]
    fn test_strips_identity_metadata_and_annotations() {
        let engine = FieldEngine::default();
        let input = yaml(
            r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: prod
  uid: 1234
  resourceVersion: "99"
  generation: 4
  creationTimestamp: "2021-01-01T00:00:00Z"
  selfLink: /apis/apps/v1/namespaces/prod/deployments/web
  ownerReferences:
    - kind: Foo
  annotations:
    kubectl.kubernetes.io/last-applied-configuration: "{}"
    deployment.kubernetes.io/revision: "3"
    cattle.io/status: "x"
    keep.me/please: "yes"
  labels:
    app: web
    tanka.dev/environment: abc
spec:
  replicas: 2
  template:
    metadata:
      annotations:
        cattle.io/timestamp: "2021-01-01T00:00:00Z"
      labels:
        app: web
"#,
        );
        let expected = yaml(
            r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
  namespace: prod
  annotations:
    keep.me/please: "yes"
  labels:
    app: web
spec:
  replicas: 2
  template:
    metadata:
      labels:
        app: web
"#,
        );
        assert_eq!(engine.sanitize_resource(&input), expected);
    }

    #[test]
    fn test_headless_service_loses_cluster_ip_none() {
        let engine = FieldEngine::default();
        let input = yaml("kind: Service\nspec:\n  clusterIP: None\n  selector:\n    app: db\n");
        assert_eq!(
            engine.sanitize_resource(&input),
            yaml("kind: Service\nspec:\n  selector:\n    app: db\n")
        );
    }

    #[test]
    fn test_null_resource_passes_through() {
        assert_eq!(FieldEngine::default().sanitize_resource(&Value::Null), Value::Null);
    }

    #[test]
    fn test_custom_rules() {
        let rules = RuleSet::from_yaml_str("rules:\n  - name: drop_replicas\n    path: [spec, replicas]\n").unwrap();
        let engine = FieldEngine::with_rules(rules, FilterOptions::default());
        let input = yaml("kind: Deployment\nspec:\n  replicas: 3\nstatus:\n  ready: 1\n");
        // Only the supplied rule runs; `status` survives.
        assert_eq!(engine.sanitize_resource(&input), yaml("kind: Deployment\nstatus:\n  ready: 1\n"));
        assert_eq!(engine.get_rules().rules.len(), 1);
    }

    #[test]
    fn test_vendor_toggle_does_not_change_output() {
        let input = yaml("kind: Pod\nmetadata:\n  name: p\n  annotations:\n    cattle.io/status: x\n");
        let on = FieldEngine::new(FilterOptions { remove_vendor_metadata: true });
        let off = FieldEngine::new(FilterOptions { remove_vendor_metadata: false });
        assert_eq!(on.sanitize_resource(&input), off.sanitize_resource(&input));
        assert!(!off.get_options().remove_vendor_metadata);
    }
}
