//! Adaptive themes that respond to system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme that adapts based on the user's display mode.
///
/// Contains separate themes for light and dark modes, automatically
/// selecting the appropriate one based on OS settings.
///
/// # Example
///
/// ```rust
/// use restyle::{resolve, AdaptiveTheme, StyleMap, StyleValue, Theme};
/// use serde_json::json;
///
/// let light = Theme::new().add("colors", json!({ "text": "black" }));
/// let dark = Theme::new().add("colors", json!({ "text": "white" }));
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// // Resolves against whichever variant matches the user's OS theme.
/// let sx = StyleValue::Map(StyleMap::new().add("color", "text"));
/// let style = resolve(&sx, &adaptive);
/// assert!(style["color"] == json!("black") || style["color"] == json!("white"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub(crate) fn resolve(&self) -> Theme {
        match detect_color_mode() {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, StyleMap, StyleValue};
    use serde_json::json;

    #[test]
    fn test_adaptive_theme_uses_detector() {
        let light = Theme::new().add("colors", json!({ "text": "black" }));
        let dark = Theme::new().add("colors", json!({ "text": "white" }));
        let adaptive = AdaptiveTheme::new(light, dark);
        let sx = StyleValue::Map(StyleMap::new().add("color", "text"));

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(resolve(&sx, &adaptive)["color"], json!("white"));

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(resolve(&sx, &adaptive)["color"], json!("black"));

        // Reset to default for other tests
        set_theme_detector(|| ColorMode::Light);
    }
}
