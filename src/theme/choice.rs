//! Theme selection for resolution.

use once_cell::sync::Lazy;

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;

/// Reference to either a fixed theme or an adaptive theme.
///
/// This enum is what the resolver accepts as its theme argument, so callers
/// can hand in a plain [`Theme`] or an [`AdaptiveTheme`] that tracks the
/// system color mode. `From` impls let both be passed directly.
#[derive(Debug)]
pub enum ThemeChoice<'a> {
    /// A fixed theme that doesn't change based on color mode.
    Theme(&'a Theme),
    /// An adaptive theme that selects light/dark based on OS settings.
    Adaptive(&'a AdaptiveTheme),
}

impl ThemeChoice<'_> {
    /// Resolves to a concrete theme.
    ///
    /// For fixed themes, returns a clone. For adaptive themes, detects the
    /// current color mode and returns the appropriate variant.
    pub(crate) fn resolve(&self) -> Theme {
        match self {
            Self::Theme(theme) => (*theme).clone(),
            Self::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

static EMPTY_THEME: Lazy<Theme> = Lazy::new(Theme::new);

impl Default for ThemeChoice<'_> {
    /// An empty theme, so resolving with no theme at all cannot fail and
    /// falls back to the built-in defaults.
    fn default() -> Self {
        Self::Theme(&EMPTY_THEME)
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        Self::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        Self::Adaptive(adaptive)
    }
}
