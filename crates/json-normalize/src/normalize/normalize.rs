use serde_json::{Map, Value};

use crate::parse_embedded::parse_embedded;

/// Normalize a JSON value by decoding embedded JSON strings.
///
/// Every string-valued entry of an object that parses as JSON is replaced by
/// its decoded value. The decoded value is taken at face value and not
/// normalized further, so a single call performs exactly one level of
/// unwrapping at each string. Traversal descends into nested objects only;
/// arrays are passed through unchanged, including any encoded strings inside
/// them. Non-object top-level input (including a bare string) is returned
/// unchanged, since strings only become decode candidates as object entries.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_normalize::normalize;
///
/// let value = json!({"a": "{\"x\":1}", "b": "not json"});
/// assert_eq!(normalize(&value), json!({"a": {"x": 1}, "b": "not json"}));
/// ```
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(normalize_map(obj)),
        _ => value.clone(),
    }
}

/// Normalize the entries of an object map.
///
/// Applies one of four rules to each entry: a string that parses as JSON is
/// replaced by the parsed value, a string that does not parse is kept as-is,
/// a nested object is normalized recursively, and any other value (number,
/// boolean, null, array) passes through unchanged. Entry order is preserved.
pub fn normalize_map(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut new_obj = Map::new();
    for (key, val) in obj {
        let new_val = match val {
            Value::String(s) => match parse_embedded(s) {
                Some(parsed) => parsed,
                None => val.clone(),
            },
            Value::Object(nested) => Value::Object(normalize_map(nested)),
            // Arrays are deliberately not descended into.
            _ => val.clone(),
        };
        new_obj.insert(key.clone(), new_val);
    }
    new_obj
}
