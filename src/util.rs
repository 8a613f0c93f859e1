//! Utility functions for path lookup and numeric-literal parsing.

use serde_json::{Number, Value};

/// Looks up a value by a dot-separated path.
///
/// Object segments index by key; array segments index by parsed integer.
/// Returns `None` as soon as any segment is missing, so partially-specified
/// data degrades to the caller's fallback instead of failing.
///
/// # Example
///
/// ```rust
/// use restyle::get;
/// use serde_json::json;
///
/// let theme = json!({ "colors": { "blue": ["#07c", "#05a"] } });
///
/// assert_eq!(get(&theme, "colors.blue.0"), Some(&json!("#07c")));
/// assert_eq!(get(&theme, "colors.red"), None);
/// ```
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = Some(root);
    for segment in path.split('.') {
        current = current.and_then(|value| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        });
    }
    current
}

/// Looks up a value by a dot-separated path, falling back to a default.
///
/// # Example
///
/// ```rust
/// use restyle::get_or;
/// use serde_json::json;
///
/// let theme = json!({ "space": [0, 4, 8] });
/// let fallback = json!(16);
///
/// assert_eq!(get_or(&theme, "space.1", &fallback), &json!(4));
/// assert_eq!(get_or(&theme, "space.9", &fallback), &json!(16));
/// ```
pub fn get_or<'a>(root: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(root, path).unwrap_or(default)
}

/// Parses a string that matches the numeric-literal grammar.
///
/// A string is numeric iff it is non-empty, consists only of ASCII digits
/// and `+ - . e E`, and parses as a finite number. Integers keep integer
/// representation. Empty or whitespace-only strings, word forms such as
/// `"Infinity"` or `"NaN"`, and literals that overflow to infinity are all
/// rejected and stay strings.
///
/// # Example
///
/// ```rust
/// use restyle::parse_number;
///
/// assert_eq!(parse_number("2"), Some(2.into()));
/// assert_eq!(parse_number("-1.5"), serde_json::Number::from_f64(-1.5));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("Infinity"), None);
/// assert_eq!(parse_number("12px"), None);
/// ```
pub fn parse_number(s: &str) -> Option<Number> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if s.is_empty() || !s.chars().all(allowed) {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(Number::from(n));
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_single_key() {
        let value = json!({ "space": [0, 4, 8] });
        assert_eq!(get(&value, "space"), Some(&json!([0, 4, 8])));
    }

    #[test]
    fn test_get_nested_path() {
        let value = json!({ "buttons": { "primary": { "color": "white" } } });
        assert_eq!(get(&value, "buttons.primary.color"), Some(&json!("white")));
    }

    #[test]
    fn test_get_array_index_segment() {
        let value = json!({ "base": { "blue": ["#07c"] } });
        assert_eq!(get(&value, "base.blue.0"), Some(&json!("#07c")));
        assert_eq!(get(&value, "base.blue.1"), None);
    }

    #[test]
    fn test_get_missing_intermediate_segment() {
        let value = json!({ "colors": { "primary": "tomato" } });
        assert_eq!(get(&value, "palette.primary"), None);
    }

    #[test]
    fn test_get_through_scalar() {
        let value = json!({ "fontSize": 16 });
        assert_eq!(get(&value, "fontSize.0"), None);
    }

    #[test]
    fn test_get_or_default() {
        let value = json!({});
        let default = json!("auto");
        assert_eq!(get_or(&value, "margin", &default), &json!("auto"));
    }

    #[test]
    fn test_parse_number_integers() {
        assert_eq!(parse_number("0"), Some(0.into()));
        assert_eq!(parse_number("600"), Some(600.into()));
        assert_eq!(parse_number("-3"), Some((-3).into()));
        assert_eq!(parse_number("+5"), Some(5.into()));
    }

    #[test]
    fn test_parse_number_floats() {
        assert_eq!(parse_number("1.5"), Number::from_f64(1.5));
        assert_eq!(parse_number("2e3"), Number::from_f64(2000.0));
    }

    #[test]
    fn test_parse_number_rejects_empty_and_whitespace() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("  "), None);
    }

    #[test]
    fn test_parse_number_rejects_word_forms() {
        assert_eq!(parse_number("Infinity"), None);
        assert_eq!(parse_number("-Infinity"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_number_rejects_overflow() {
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn test_parse_number_rejects_trailing_units() {
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("auto"), None);
    }
}
