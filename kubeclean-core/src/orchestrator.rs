//! Applies an engine to a whole input document.
//!
//! A List document (one whose `items` field is a sequence) has each item
//! cleaned independently while every other top-level key is left as is.
//! Any other document is cleaned as a single resource.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use serde_yaml::Value;

use crate::engine::SanitizationEngine;

/// Key holding the members of a List document.
pub const ITEMS_KEY: &str = "items";

/// Returns true if `document` has a sequence under `items`.
pub fn is_list_document(document: &Value) -> bool {
    matches!(document.get(ITEMS_KEY), Some(Value::Sequence(_)))
}

/// Cleans `document` with `engine`, returning a new document.
pub fn sanitize_document(engine: &dyn SanitizationEngine, document: &Value) -> Value {
    if !is_list_document(document) {
        info!("Sanitizing single resource document.");
        return engine.sanitize_resource(document);
    }

    let mut output = document.clone();
    if let Some(items) = output.get_mut(ITEMS_KEY).and_then(Value::as_sequence_mut) {
        info!("Sanitizing list document with {} items.", items.len());
        for (index, item) in items.iter_mut().enumerate() {
            debug!("Sanitizing item {}.", index);
            *item = engine.sanitize_resource(item);
        }
    }
    output
}
