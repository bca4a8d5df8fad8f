//! fields.rs - Removes server-generated fields from a single resource.
//!
//! Deletion is driven by the [`RuleSet`] table. Every path walk is null-safe: a
//! missing key or a non-map value along the way makes the rule a no-op.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_yaml::Value;

use crate::config::{FilterOptions, RuleSet};

/// Removes the value at `path` from `value`, returning it if it was present.
///
/// Only maps are walked; sequences and scalars end the walk.
pub fn remove_path(value: &mut Value, path: &[String]) -> Option<Value> {
    let (last, parents) = path.split_last()?;
    let mut current = value;
    for segment in parents {
        current = match current.get_mut(segment.as_str()) {
            Some(next) if next.is_mapping() => next,
            _ => return None,
        };
    }
    current.as_mapping_mut()?.shift_remove(last.as_str())
}

/// Returns the resource kind, if the document has a string `kind` field.
pub fn resource_kind(document: &Value) -> Option<&str> {
    document.get("kind").and_then(Value::as_str)
}

/// Applies every matching rule to a copy of `document`.
///
/// The input is never modified. The copy is not pruned here; see
/// [`crate::sanitizers::pruner`].
pub fn strip_fields(document: &Value, rules: &RuleSet, _options: &FilterOptions) -> Value {
    let mut cleaned = document.clone();
    if !cleaned.is_mapping() {
        return cleaned;
    }

    let kind = resource_kind(document);
    for rule in rules.rules_for_kind(kind) {
        if remove_path(&mut cleaned, &rule.path).is_some() {
            debug!(
                "Rule '{}' removed {} from {}.",
                rule.name,
                rule.path.join("."),
                kind.unwrap_or("<no kind>")
            );
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_remove_path_nested() {
        let mut doc = yaml("metadata:\n  name: web\n  uid: abc\n");
        let removed = remove_path(&mut doc, &path(&["metadata", "uid"]));
        assert_eq!(removed, Some(Value::from("abc")));
        assert_eq!(doc, yaml("metadata:\n  name: web\n"));
    }

    #[test]
    fn test_remove_path_missing_parent_is_noop() {
        let mut doc = yaml("kind: Pod\n");
        assert!(remove_path(&mut doc, &path(&["metadata", "annotations", "x"])).is_none());
        assert_eq!(doc, yaml("kind: Pod\n"));
    }

    #[test]
    fn test_remove_path_through_scalar_is_noop() {
        let mut doc = yaml("metadata: just-a-string\n");
        assert!(remove_path(&mut doc, &path(&["metadata", "uid"])).is_none());

        let mut doc = yaml("metadata: null\n");
        assert!(remove_path(&mut doc, &path(&["metadata", "uid"])).is_none());
    }

    #[test]
    fn test_remove_path_does_not_walk_sequences() {
        let mut doc = yaml("spec:\n  - claimRef: x\n");
        assert!(remove_path(&mut doc, &path(&["spec", "claimRef"])).is_none());
        assert_eq!(doc, yaml("spec:\n  - claimRef: x\n"));
    }

    #[test]
    fn test_remove_path_keeps_sibling_order() {
        let mut doc = yaml("metadata:\n  a: 1\n  uid: x\n  b: 2\n");
        remove_path(&mut doc, &path(&["metadata", "uid"]));
        let keys: Vec<&str> = doc["metadata"]
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_resource_kind() {
        assert_eq!(resource_kind(&yaml("kind: Service\n")), Some("Service"));
        assert_eq!(resource_kind(&yaml("kind: 3\n")), None);
        assert_eq!(resource_kind(&yaml("name: x\n")), None);
        assert_eq!(resource_kind(&Value::Null), None);
    }

    #[test]
    fn test_strip_fields_leaves_input_untouched() {
        let input = yaml("kind: Pod\nstatus:\n  phase: Running\n");
        let output = strip_fields(&input, RuleSet::load_default_rules(), &FilterOptions::default());
        assert_eq!(output, yaml("kind: Pod\n"));
        assert_eq!(input, yaml("kind: Pod\nstatus:\n  phase: Running\n"));
    }

    #[test]
    fn test_strip_fields_kind_specific() {
        let rules = RuleSet::load_default_rules();
        let options = FilterOptions::default();

        let sa = yaml("kind: ServiceAccount\nsecrets:\n  - name: token\n");
        assert_eq!(strip_fields(&sa, rules, &options), yaml("kind: ServiceAccount\n"));

        // `secrets` on anything else is left alone.
        let other = yaml("kind: Deployment\nsecrets:\n  - name: token\n");
        assert_eq!(strip_fields(&other, rules, &options), other);
    }

    #[test]
    fn test_strip_fields_null_document() {
        let out = strip_fields(&Value::Null, RuleSet::load_default_rules(), &FilterOptions::default());
        assert_eq!(out, Value::Null);
    }
}
