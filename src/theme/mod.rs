//! Theme system for organizing and selecting token scales.
//!
//! This module provides:
//!
//! - [`Theme`]: A named collection of design-token scales with fluent builder API
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Reference type for selecting themes at resolution time
//! - [`ColorMode`]: Light or dark color mode enum
//!
//! Themes are plain data; the resolver merges the selected theme over the
//! built-in defaults before any lookup.

mod adaptive;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use theme::{default_theme, Theme};
