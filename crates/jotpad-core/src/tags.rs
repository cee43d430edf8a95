//! Tag list parsing and normalisation.
//!
//! Requests carry tags as a JSON array whose entries may be any JSON value.
//! Each entry is stringified and trimmed. Blanks are dropped and repeats
//! collapse to their first occurrence, so attaching `["a", "a", " b "]` is
//! the same as attaching `["a", "b"]`.

use serde_json::Value;

use crate::error::{Error, Result};

/// Message returned when the `tags` field is not an array.
pub const TAGS_NOT_ARRAY_MESSAGE: &str = "Tags must be array";

/// Convert the `tags` field of a request body into raw tag names.
///
/// Only the field itself must be an array. Every entry is rendered the way a
/// browser would print it, so `null` becomes `"null"`, `1.0` becomes `"1"` and
/// an object becomes `"[object Object]"`.
pub fn parse_tag_list(value: Option<&Value>) -> Result<Vec<String>> {
    match value {
        Some(Value::Array(items)) => Ok(items.iter().map(display_entry).collect()),
        _ => Err(Error::InvalidInput(TAGS_NOT_ARRAY_MESSAGE.to_string())),
    }
}

/// String form of a single JSON value.
fn display_entry(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_entry(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest decimal form of a number: no trailing `.0`, and exponent
/// notation (`1e+21`, `1e-7`) outside `1e-6..1e21`.
fn display_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let f = n.as_f64().unwrap_or(0.0);
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", f)
    } else {
        let exp = format!("{:e}", f);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    }
}

/// Trim names, drop blanks and remove repeats while keeping input order.
pub fn normalize_tag_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() || out.iter().any(|existing| existing == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_collapses_duplicates_and_whitespace() {
        let names = normalize_tag_names(["a", "a", " b "]);
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_normalize_skips_blank_entries() {
        let names = normalize_tag_names(["", "   ", "home", "\t"]);
        assert_eq!(names, vec!["home".to_string()]);
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        let names = normalize_tag_names(["Home", "home"]);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        for value in [json!("errand"), json!({"a": 1}), json!(3), Value::Null] {
            match parse_tag_list(Some(&value)) {
                Err(Error::InvalidInput(msg)) => assert_eq!(msg, TAGS_NOT_ARRAY_MESSAGE),
                other => panic!("expected InvalidInput for {}, got {:?}", value, other),
            }
        }
        assert!(parse_tag_list(None).is_err());
    }

    #[test]
    fn test_parse_stringifies_scalars() {
        let value = json!(["errand", 42, true, false, null, -3]);
        let raw = parse_tag_list(Some(&value)).unwrap();
        assert_eq!(raw, vec!["errand", "42", "true", "false", "null", "-3"]);
    }

    #[test]
    fn test_parse_prints_numbers_without_trailing_zero() {
        let value = json!([1.0, 1.5, -0.0, 100.25, 1e21, 1.5e22, 1e-7, 0.000001]);
        let raw = parse_tag_list(Some(&value)).unwrap();
        assert_eq!(
            raw,
            vec!["1", "1.5", "0", "100.25", "1e+21", "1.5e+22", "1e-7", "0.000001"]
        );
    }

    #[test]
    fn test_parse_stringifies_nested_entries() {
        let value = json!([["x"], [1, [2, 3]], [null, "a"], [], {"a": 1}]);
        let raw = parse_tag_list(Some(&value)).unwrap();
        assert_eq!(raw, vec!["x", "1,2,3", ",a", "", "[object Object]"]);
    }

    #[test]
    fn test_parsed_entries_normalize_to_names() {
        let value = json!([null, 1.0, {"a": 1}, " null ", []]);
        let names = normalize_tag_names(parse_tag_list(Some(&value)).unwrap());
        assert_eq!(names, vec!["null", "1", "[object Object]"]);
    }

    #[test]
    fn test_parse_accepts_empty_array() {
        let raw = parse_tag_list(Some(&json!([]))).unwrap();
        assert!(raw.is_empty());
    }
}
