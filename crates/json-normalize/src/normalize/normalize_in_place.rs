use serde_json::Value;

use crate::parse_embedded::parse_embedded;

/// Normalize a JSON value in place by decoding embedded JSON strings.
///
/// Mutating counterpart of [`normalize`](crate::normalize::normalize): the
/// same entry rules are applied directly to the input. String entries that
/// parse as JSON are overwritten with the decoded value (one level of
/// unwrapping), nested objects are visited recursively, and everything else,
/// including arrays, is left as-is. A non-object value is not modified.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_normalize::normalize_in_place;
///
/// let mut value = json!({"a": "{\"x\":1}"});
/// normalize_in_place(&mut value);
/// assert_eq!(value, json!({"a": {"x": 1}}));
/// ```
pub fn normalize_in_place(value: &mut Value) {
    let Value::Object(obj) = value else {
        return;
    };
    for (_, val) in obj.iter_mut() {
        match val {
            Value::String(s) => {
                if let Some(parsed) = parse_embedded(s) {
                    *val = parsed;
                }
            }
            Value::Object(_) => normalize_in_place(val),
            // Arrays are deliberately not descended into.
            _ => {}
        }
    }
}
