//! Layer merge
//!
//! - Objects: merged key by key
//! - Null: "not set", the lower layer is kept
//! - Everything else: the higher layer wins

use serde_json::Value;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both objects: merge key by key
        (Value::Object(mut merged), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                let value = match merged.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                // A null that reached here had nothing below it; leave the key unset
                if !value.is_null() {
                    merged.insert(key, value);
                }
            }
            Value::Object(merged)
        }
        // Unset flag
        (base, Value::Null) => base,
        // Scalars and arrays: REPLACE
        (_, overlay) => overlay,
    }
}

/// Merge layers in order; later layers take precedence.
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers.into_iter().fold(Value::Null, deep_merge)
}
