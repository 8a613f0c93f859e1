//! The style resolver.
//!
//! This module turns a style map of shorthand keys and token references into
//! a flat style object: aliases expand to canonical property names, token
//! values resolve against theme scales, negative margins and offsets resolve
//! sign-aware, `variant` entries expand theme sub-styles inline, and fan-out
//! properties duplicate their value across several outputs.
//!
//! Resolution is a pure function of its inputs. Missing scales, missing
//! tokens, and unresolvable paths all fall back to the literal input value;
//! no input is ever an error.

use serde_json::{Map, Number, Value};

use super::tables;
use super::value::StyleValue;
use crate::theme::{Theme, ThemeChoice};
use crate::util;

/// A resolved style object: canonical property name to final value.
pub type Style = Map<String, Value>;

/// The scale used when the theme has nothing for a property.
static EMPTY_SCALE: Value = Value::Null;

/// Resolves a style map against a theme.
///
/// The theme is shallow-merged over the built-in defaults, then each entry
/// is processed in insertion order: dynamic values are invoked with the
/// merged theme, `variant` entries expand theme sub-styles at their
/// position, nested maps recurse, and leaf values go through alias
/// expansion, numeric-string coercion, and scale lookup.
///
/// Anything other than a map or array input yields an empty style, so
/// resolving with no styles at all cannot fail.
///
/// # Example
///
/// ```rust
/// use restyle::{resolve, StyleMap, StyleValue, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new().add("colors", json!({ "primary": "tomato" }));
/// let sx = StyleValue::Map(
///     StyleMap::new().add("mt", 3).add("mx", "auto").add("color", "primary"),
/// );
///
/// let style = resolve(&sx, &theme);
/// assert_eq!(style["marginTop"], json!(16));
/// assert_eq!(style["marginHorizontal"], json!("auto"));
/// assert_eq!(style["color"], json!("tomato"));
/// ```
pub fn resolve<'a>(styles: &StyleValue, theme: impl Into<ThemeChoice<'a>>) -> Style {
    let theme = theme.into().resolve().with_defaults();
    resolve_styles(styles, &theme)
}

/// Resolves against an already-merged theme. Recursion re-enters here so
/// defaults are merged exactly once per top-level call.
fn resolve_styles(styles: &StyleValue, theme: &Theme) -> Style {
    let evaluated;
    let styles = match styles {
        StyleValue::Dynamic(f) => {
            evaluated = f(theme);
            &evaluated
        }
        other => other,
    };

    let mut out = Style::new();
    match styles {
        StyleValue::Map(map) => {
            for (key, value) in map.iter() {
                resolve_entry(key, value, theme, &mut out);
            }
        }
        StyleValue::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                resolve_entry(&index.to_string(), value, theme, &mut out);
            }
        }
        _ => {}
    }
    out
}

fn resolve_entry(key: &str, raw: &StyleValue, theme: &Theme, out: &mut Style) {
    let evaluated;
    let value = match raw {
        StyleValue::Dynamic(f) => {
            evaluated = f(theme);
            &evaluated
        }
        other => other,
    };

    if key == "variant" {
        // A dot-path into the theme naming a reusable style map. Expansion
        // is positional: later entries in the input still override fields
        // merged here.
        if let StyleValue::String(path) = value {
            if let Some(target) = theme.get(path) {
                let target = StyleValue::from(target.clone());
                for (prop, resolved) in resolve_styles(&target, theme) {
                    out.insert(prop, resolved);
                }
            }
        }
        return;
    }

    let prop = tables::alias_for(key).unwrap_or(key);

    if matches!(value, StyleValue::Map(_) | StyleValue::Array(_)) {
        out.insert(prop.to_string(), Value::Object(resolve_styles(value, theme)));
        return;
    }

    if !tables::keeps_string(prop) {
        if let StyleValue::String(s) = value {
            if let Some(n) = util::parse_number(s) {
                out.insert(prop.to_string(), Value::Number(n));
                return;
            }
        }
    }

    let scale = tables::scale_for(prop)
        .and_then(|name| theme.scale(name))
        .or_else(|| theme.scale(prop))
        .unwrap_or(&EMPTY_SCALE);

    let resolved = if tables::negates(prop) {
        positive_or_negative(scale, value)
    } else {
        scale_lookup(scale, value)
            .cloned()
            .unwrap_or_else(|| value.to_value())
    };

    match tables::fan_out(prop) {
        Some(targets) => {
            for target in targets {
                out.insert((*target).to_string(), resolved.clone());
            }
        }
        None => {
            out.insert(prop.to_string(), resolved);
        }
    }
}

/// Looks a token up inside a scale.
///
/// Numbers index arrays by exact non-negative integer and objects by their
/// stringified key; strings traverse by dot-path. Anything else never
/// matches and passes through.
fn scale_lookup<'a>(scale: &'a Value, token: &StyleValue) -> Option<&'a Value> {
    match token {
        StyleValue::Number(n) => match scale {
            Value::Array(items) => array_index(n).and_then(|index| items.get(index)),
            Value::Object(map) => map.get(&number_key(n)),
            _ => None,
        },
        StyleValue::String(s) => util::get(scale, s),
        _ => None,
    }
}

/// Sign-aware lookup for margin and offset properties: a negative number
/// resolves its absolute value against the scale, then re-negates.
fn positive_or_negative(scale: &Value, value: &StyleValue) -> Value {
    let lookup_or_passthrough = |token: &StyleValue| {
        scale_lookup(scale, token)
            .cloned()
            .unwrap_or_else(|| token.to_value())
    };

    let StyleValue::Number(n) = value else {
        return lookup_or_passthrough(value);
    };
    if n.as_f64().map_or(true, |f| f >= 0.0) {
        return lookup_or_passthrough(value);
    }

    let absolute = abs_number(n);
    let resolved = lookup_or_passthrough(&StyleValue::Number(absolute));
    negate(resolved)
}

fn array_index(n: &Number) -> Option<usize> {
    if let Some(u) = n.as_u64() {
        return usize::try_from(u).ok();
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 => Some(f as usize),
        _ => None,
    }
}

/// Object-scale key for a numeric token. Integral floats render without a
/// fractional part so `3.0` and `3` address the same key.
fn number_key(n: &Number) -> String {
    if n.as_i64().is_none() && n.as_u64().is_none() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

fn abs_number(n: &Number) -> Number {
    if let Some(i) = n.as_i64() {
        return Number::from(i.unsigned_abs());
    }
    n.as_f64()
        .map(f64::abs)
        .and_then(Number::from_f64)
        .unwrap_or_else(|| Number::from(0))
}

/// Negates a scale result: numbers negate numerically, string tokens gain a
/// `-` prefix, anything else degrades to `null`.
fn negate(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(format!("-{s}")),
        Value::Number(n) => {
            if let Some(neg) = n.as_i64().and_then(i64::checked_neg) {
                return Value::Number(Number::from(neg));
            }
            n.as_f64()
                .and_then(|f| Number::from_f64(-f))
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
        _ => Value::Null,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::style::value::StyleMap;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn scale_and_negation_are_symmetric(
            scale in prop::collection::vec(1u32..10_000, 2..9),
            index in 1usize..8,
        ) {
            prop_assume!(index < scale.len());
            let theme = Theme::new().add("space", json!(scale));

            let positive = resolve(
                &StyleValue::Map(StyleMap::new().add("mt", index as i64)),
                &theme,
            );
            prop_assert_eq!(&positive["marginTop"], &json!(scale[index]));

            let negative = resolve(
                &StyleValue::Map(StyleMap::new().add("mt", -(index as i64))),
                &theme,
            );
            prop_assert_eq!(&negative["marginTop"], &json!(-(i64::from(scale[index]))));
        }

        #[test]
        fn alias_and_canonical_resolve_identically(value in prop_oneof![
            (-1000i64..1000).prop_map(StyleValue::from),
            "[a-z]{1,8}".prop_map(StyleValue::from),
        ]) {
            let theme = Theme::new()
                .add("space", json!([0, 4, 8, 16]))
                .add("colors", json!({ "primary": "tomato" }));

            let shorthand = resolve(
                &StyleValue::Map(StyleMap::new().add("mt", value.clone())),
                &theme,
            );
            let canonical = resolve(
                &StyleValue::Map(StyleMap::new().add("marginTop", value)),
                &theme,
            );
            prop_assert_eq!(shorthand, canonical);
        }

        #[test]
        fn unknown_keys_pass_values_through(
            key in "[a-z]{4,10}",
            value in "[a-zA-Z]{1,12}",
        ) {
            prop_assume!(tables::alias_for(&key).is_none());
            prop_assume!(key != "variant");

            let style = resolve(
                &StyleValue::Map(StyleMap::new().add(&key, value.as_str())),
                ThemeChoice::default(),
            );
            prop_assert_eq!(&style[&key], &json!(value));
        }
    }
}
