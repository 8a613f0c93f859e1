//! Style values and style maps.

use std::fmt;
use std::sync::Arc;

use serde_json::{Number, Value};

use crate::theme::Theme;

/// A style value computed from the active theme.
pub type StyleFn = Arc<dyn Fn(&Theme) -> StyleValue + Send + Sync>;

/// A single entry value in a style map.
///
/// Style entries are either plain leaf values, nested style maps, or
/// functions of the theme. The resolver dispatches on this shape: functions
/// are invoked with the merged theme, maps and arrays recurse, and leaves go
/// through alias and scale resolution.
#[derive(Clone, Default)]
pub enum StyleValue {
    /// The absent value; resolves to an empty style.
    #[default]
    Null,
    /// A boolean leaf, passed through untouched.
    Bool(bool),
    /// A numeric leaf or scale index.
    Number(Number),
    /// A string leaf, scale key, or dot-path token.
    String(String),
    /// A sequence; recursed into like a map keyed by element index.
    Array(Vec<StyleValue>),
    /// A nested style map, resolved recursively against the same theme.
    Map(StyleMap),
    /// A function of the theme, invoked at resolution time.
    Dynamic(StyleFn),
}

impl StyleValue {
    /// Wraps a theme function as a style value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use restyle::{resolve, StyleMap, StyleValue, Theme};
    /// use serde_json::json;
    ///
    /// let theme = Theme::new().add("colors", json!({ "primary": "tomato" }));
    /// let sx = StyleMap::new().add(
    ///     "color",
    ///     StyleValue::dynamic(|t: &Theme| t.get("colors.primary").cloned().into()),
    /// );
    ///
    /// let style = resolve(&StyleValue::Map(sx), &theme);
    /// assert_eq!(style["color"], json!("tomato"));
    /// ```
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> StyleValue + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Converts this value to plain JSON data.
    ///
    /// Maps and arrays convert structurally; a dynamic value has no data
    /// form and converts to `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null | Self::Dynamic(_) => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.to_string(), value.to_value()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                let mut styles = StyleMap::new();
                for (key, value) in map {
                    styles = styles.add(&key, Self::from(value));
                }
                Self::Map(styles)
            }
        }
    }
}

impl From<Option<Value>> for StyleValue {
    fn from(value: Option<Value>) -> Self {
        value.map(Self::from).unwrap_or(Self::Null)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map(Self::Number).unwrap_or(Self::Null)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(map: StyleMap) -> Self {
        Self::Map(map)
    }
}

/// An insertion-ordered style map.
///
/// Entries resolve in the order they were added, which is what lets a later
/// entry override fields merged earlier by a `variant` expansion. Re-adding
/// a key replaces its value in place, keeping the original position.
///
/// # Example
///
/// ```rust
/// use restyle::{resolve, StyleMap, StyleValue, Theme};
/// use serde_json::json;
///
/// let sx = StyleMap::new().add("mt", 3).add("mx", "auto");
/// let style = resolve(&StyleValue::Map(sx), &Theme::new());
///
/// assert_eq!(style["marginTop"], json!(16));
/// assert_eq!(style["marginHorizontal"], json!("auto"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleMap {
    entries: Vec<(String, StyleValue)>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry, returning the updated map for chaining.
    pub fn add(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
