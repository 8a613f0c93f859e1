//! Style-prop merging for element factories.
//!
//! An element factory extracts an `sx`-style prop from incoming element
//! properties, resolves it against the active theme, and overlays any
//! explicit raw style before constructing the element. This module is that
//! collaborator-facing seam; the factory itself and its tree construction
//! stay with the host framework, which threads the theme in explicitly.

use crate::style::{resolve, Style, StyleValue};
use crate::theme::ThemeChoice;

/// The style-bearing subset of an element's properties.
///
/// `sx` is theme-aware and goes through the resolver; `style` is a raw,
/// already-resolved style object that overrides the resolved output.
///
/// # Example
///
/// ```rust
/// use restyle::{merged_style, StyleMap, StyleProps, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new().add("colors", json!({ "primary": "tomato" }));
/// let props = StyleProps::new()
///     .sx(StyleMap::new().add("color", "primary").add("mt", 2));
///
/// let style = merged_style(&props, &theme).unwrap();
/// assert_eq!(style["color"], json!("tomato"));
/// assert_eq!(style["marginTop"], json!(8));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleProps {
    /// Theme-aware style map, resolved at merge time.
    pub sx: Option<StyleValue>,
    /// Raw style overrides, applied on top of the resolved `sx`.
    pub style: Option<Style>,
}

impl StyleProps {
    /// Creates props with neither `sx` nor `style` set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `sx` style map, returning the updated props for chaining.
    pub fn sx(mut self, sx: impl Into<StyleValue>) -> Self {
        self.sx = Some(sx.into());
        self
    }

    /// Sets the raw style overrides, returning the updated props for chaining.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Resolves the `sx` prop and overlays the raw style.
///
/// Returns `None` when the props carry no style at all, so the element
/// factory can skip attaching a style object entirely. Raw entries win over
/// resolved `sx` entries with the same property name.
pub fn merged_style<'a>(props: &StyleProps, theme: impl Into<ThemeChoice<'a>>) -> Option<Style> {
    if props.sx.is_none() && props.style.is_none() {
        return None;
    }

    let mut merged = match &props.sx {
        Some(sx) => resolve(sx, theme),
        None => Style::new(),
    };
    if let Some(raw) = &props.style {
        for (property, value) in raw {
            merged.insert(property.clone(), value.clone());
        }
    }
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleMap;
    use crate::theme::Theme;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::new().add("colors", json!({ "primary": "tomato" }))
    }

    #[test]
    fn test_no_styles_yields_none() {
        assert!(merged_style(&StyleProps::new(), &theme()).is_none());
    }

    #[test]
    fn test_sx_only() {
        let props = StyleProps::new().sx(StyleMap::new().add("bg", "primary"));
        let style = merged_style(&props, &theme()).unwrap();
        assert_eq!(style["backgroundColor"], json!("tomato"));
    }

    #[test]
    fn test_raw_style_only() {
        let mut raw = Style::new();
        raw.insert("opacity".to_string(), json!(0.5));
        let props = StyleProps::new().style(raw);

        let style = merged_style(&props, &theme()).unwrap();
        assert_eq!(style["opacity"], json!(0.5));
    }

    #[test]
    fn test_raw_style_overrides_resolved_sx() {
        let mut raw = Style::new();
        raw.insert("color".to_string(), json!("rebeccapurple"));
        let props = StyleProps::new()
            .sx(StyleMap::new().add("color", "primary").add("mt", 0))
            .style(raw);

        let style = merged_style(&props, &theme()).unwrap();
        assert_eq!(style["color"], json!("rebeccapurple"));
        assert_eq!(style["marginTop"], json!(0));
    }

    #[test]
    fn test_dynamic_sx() {
        let props = StyleProps::new().sx(StyleValue::dynamic(|t: &Theme| {
            StyleValue::Map(StyleMap::new().add("color", t.get("colors.primary").cloned()))
        }));
        let style = merged_style(&props, &theme()).unwrap();
        assert_eq!(style["color"], json!("tomato"));
    }
}
