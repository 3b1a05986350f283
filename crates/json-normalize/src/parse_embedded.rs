use serde_json::Value;

/// Attempt to parse a string as an embedded JSON document.
///
/// Returns `Some(value)` when the string is valid JSON and `None` when it is
/// not. The `None` branch is an ordinary outcome, not an error: callers that
/// probe candidate strings treat it as "leave the string as it was".
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_normalize::parse_embedded::parse_embedded;
///
/// assert_eq!(parse_embedded("{\"x\":1}"), Some(json!({"x": 1})));
/// assert_eq!(parse_embedded("\"plain string\""), Some(json!("plain string")));
/// assert_eq!(parse_embedded("not json"), None);
/// ```
pub fn parse_embedded(s: &str) -> Option<Value> {
    serde_json::from_str(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_embedded_object() {
        assert_eq!(parse_embedded("{\"x\":1}"), Some(json!({"x": 1})));
    }

    #[test]
    fn test_parse_embedded_array() {
        assert_eq!(parse_embedded("[1, 2, 3]"), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_parse_embedded_quoted_string() {
        assert_eq!(parse_embedded("\"hi\""), Some(json!("hi")));
    }

    #[test]
    fn test_parse_embedded_number() {
        assert_eq!(parse_embedded("42"), Some(json!(42)));
    }

    #[test]
    fn test_parse_embedded_boolean() {
        assert_eq!(parse_embedded("true"), Some(json!(true)));
    }

    #[test]
    fn test_parse_embedded_null() {
        assert_eq!(parse_embedded("null"), Some(json!(null)));
    }

    #[test]
    fn test_parse_embedded_surrounding_whitespace() {
        assert_eq!(parse_embedded("  {\"x\":1}  "), Some(json!({"x": 1})));
    }

    #[test]
    fn test_parse_embedded_plain_text() {
        assert_eq!(parse_embedded("not json"), None);
    }

    #[test]
    fn test_parse_embedded_empty_string() {
        assert_eq!(parse_embedded(""), None);
    }

    #[test]
    fn test_parse_embedded_almost_json() {
        assert_eq!(parse_embedded("{\"x\":1"), None);
        assert_eq!(parse_embedded("{'x': 1}"), None);
    }

    #[test]
    fn test_parse_embedded_trailing_garbage() {
        assert_eq!(parse_embedded("{} trailing"), None);
    }
}
