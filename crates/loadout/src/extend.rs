use serde_json::{Map, Value};

/// Shallow merge of JSON objects into a fresh object.
///
/// Keys from `base` are copied first, then each overlay in order; later keys
/// win. Overlays that are absent or not objects are skipped, and a non-object
/// `base` starts from an empty object.
///
/// ```
/// use loadout::extend;
/// use serde_json::json;
///
/// let merged = extend(&json!({ "a": 1, "b": 2 }), &[Some(&json!({ "b": 3 })), None]);
/// assert_eq!(merged, json!({ "a": 1, "b": 3 }));
/// ```
pub fn extend(base: &Value, overlays: &[Option<&Value>]) -> Value {
    let mut merged = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for overlay in overlays.iter().flatten() {
        if let Value::Object(map) = overlay {
            for (key, value) in map {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(merged)
}
