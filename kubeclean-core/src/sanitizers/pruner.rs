//! pruner.rs - Recursive removal of empty values from a document.
//!
//! A map entry is dropped when its value is null, an empty sequence, or a map
//! that is empty once its own entries have been pruned. Sequences are never
//! descended into: a non-empty sequence is kept exactly as it was.

use serde_yaml::{Mapping, Value};

/// Returns a pruned copy of `mapping`.
pub fn prune_mapping(mapping: &Mapping) -> Mapping {
    let mut pruned = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        match value {
            Value::Mapping(inner) => {
                let inner = prune_mapping(inner);
                if !inner.is_empty() {
                    pruned.insert(key.clone(), Value::Mapping(inner));
                }
            }
            Value::Null => {}
            Value::Sequence(items) if items.is_empty() => {}
            other => {
                pruned.insert(key.clone(), other.clone());
            }
        }
    }
    pruned
}

/// Prunes a document. Anything other than a map is returned unchanged.
pub fn prune_empty(value: &Value) -> Value {
    match value {
        Value::Mapping(mapping) => Value::Mapping(prune_mapping(mapping)),
        other => other.clone(),
    }
}
