//! Theme struct holding design-token scales.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::util;

/// A named collection of design-token scales used when resolving styles.
///
/// A scale is any JSON value under a scale name: arrays are indexed
/// numerically, objects by string key (including dot-paths into nested
/// structure). Arbitrary nested namespaces such as `buttons` or `text` hold
/// variant style maps.
///
/// # Example
///
/// ```rust
/// use restyle::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("colors", json!({ "primary": "tomato", "secondary": "cyan" }))
///     .add("space", json!([0, 4, 8, 16, 32]))
///     .add("buttons", json!({ "primary": { "color": "primary", "p": 2 } }));
///
/// assert_eq!(theme.get("colors.primary"), Some(&json!("tomato")));
/// assert_eq!(theme.get("space.2"), Some(&json!(8)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    pub(crate) scales: Map<String, Value>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self { scales: Map::new() }
    }

    /// Creates a theme from a JSON value.
    ///
    /// Non-object values yield an empty theme; a theme never fails to
    /// construct.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(scales) => Self { scales },
            _ => Self::new(),
        }
    }

    /// Parses a theme from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Adds a scale, returning the updated theme for chaining.
    pub fn add(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.scales.insert(name.to_string(), value.into());
        self
    }

    /// Returns a scale by name.
    pub fn scale(&self, name: &str) -> Option<&Value> {
        self.scales.get(name)
    }

    /// Looks up a theme value by dot-separated path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            Some((first, rest)) => util::get(self.scales.get(first)?, rest),
            None => self.scales.get(path),
        }
    }

    /// Whether the theme has no scales.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// This theme shallow-merged over the built-in default theme.
    ///
    /// Scales present here win; default scales not overridden survive.
    pub(crate) fn with_defaults(&self) -> Self {
        let mut scales = default_theme().scales.clone();
        for (name, value) in &self.scales {
            scales.insert(name.clone(), value.clone());
        }
        Self { scales }
    }
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("space", json!([0, 4, 8, 16, 32, 64, 128, 256, 512]))
        .add("fontSizes", json!([12, 14, 16, 20, 24, 32, 48, 64, 72]))
});

/// The built-in default theme.
///
/// Provides baseline `space` and `fontSizes` scales; any supplied theme
/// shallow-merges over these at resolution time.
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_add_and_scale() {
        let theme = Theme::new().add("colors", json!({ "primary": "tomato" }));
        assert_eq!(theme.scale("colors"), Some(&json!({ "primary": "tomato" })));
        assert_eq!(theme.scale("space"), None);
    }

    #[test]
    fn test_theme_get_dot_path() {
        let theme = Theme::new().add("text", json!({ "caps": { "letterSpacing": "0.1em" } }));
        assert_eq!(theme.get("text.caps.letterSpacing"), Some(&json!("0.1em")));
        assert_eq!(theme.get("text.title"), None);
    }

    #[test]
    fn test_theme_get_array_segment() {
        let theme = Theme::new().add("base", json!({ "blue": ["#07c"] }));
        assert_eq!(theme.get("base.blue.0"), Some(&json!("#07c")));
    }

    #[test]
    fn test_theme_from_value_non_object() {
        assert!(Theme::from_value(json!([1, 2, 3])).is_empty());
        assert!(Theme::from_value(json!("space")).is_empty());
    }

    #[test]
    fn test_theme_from_json_str() {
        let theme = Theme::from_json_str(r#"{ "space": [0, 2, 4] }"#).unwrap();
        assert_eq!(theme.get("space.1"), Some(&json!(2)));

        assert!(Theme::from_json_str("not json").is_err());
    }

    #[test]
    fn test_default_theme_scales() {
        let theme = default_theme();
        assert_eq!(
            theme.scale("space"),
            Some(&json!([0, 4, 8, 16, 32, 64, 128, 256, 512]))
        );
        assert_eq!(
            theme.scale("fontSizes"),
            Some(&json!([12, 14, 16, 20, 24, 32, 48, 64, 72]))
        );
    }

    #[test]
    fn test_with_defaults_overrides_and_survives() {
        let theme = Theme::new().add("space", json!([0, 1, 2])).with_defaults();
        // Supplied scale wins.
        assert_eq!(theme.scale("space"), Some(&json!([0, 1, 2])));
        // Non-overridden default survives.
        assert_eq!(theme.get("fontSizes.0"), Some(&json!(12)));
    }

    #[test]
    fn test_theme_default() {
        assert!(Theme::default().is_empty());
    }
}
