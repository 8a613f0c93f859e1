//! Theme-driven style-prop resolution.
//!
//! `restyle` expands style shorthand keys (`mt`, `px`, `bg`, …) into
//! canonical platform style properties and resolves token references against
//! the scales of a [`Theme`] (`space`, `colors`, `fontSizes`, `sizes`, …).
//! Token references are numeric indices into array scales or string keys
//! into object scales, including dot-paths into nested structure; anything
//! a scale doesn't know passes through as a literal value, so resolution
//! never fails.
//!
//! The resolver is a pure function: identical inputs always produce an
//! identical [`Style`], no input is mutated, and the only shared data is a
//! set of immutable lookup tables, so concurrent resolution needs no
//! coordination.
//!
//! # Quick start
//!
//! ```rust
//! use restyle::{resolve, StyleMap, StyleValue, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::new()
//!     .add("colors", json!({ "primary": "tomato" }))
//!     .add("buttons", json!({
//!         "primary": { "color": "primary", "px": 3, "borderRadius": 4 }
//!     }));
//!
//! let sx = StyleValue::Map(
//!     StyleMap::new()
//!         .add("variant", "buttons.primary")
//!         .add("mt", 2)
//!         .add("mx", "auto"),
//! );
//!
//! let style = resolve(&sx, &theme);
//! assert_eq!(style["color"], json!("tomato"));
//! assert_eq!(style["paddingHorizontal"], json!(16));
//! assert_eq!(style["borderRadius"], json!(4));
//! assert_eq!(style["marginTop"], json!(8));
//! assert_eq!(style["marginHorizontal"], json!("auto"));
//! ```
//!
//! # Themes
//!
//! A theme maps scale names to scale values, built fluently or loaded from
//! JSON. Supplied themes shallow-merge over the built-in defaults
//! ([`default_theme`]), which provide baseline `space` and `fontSizes`
//! scales. [`AdaptiveTheme`] pairs a light and a dark theme and selects one
//! by the OS color mode.
//!
//! # Element factories
//!
//! A host framework's element factory splits a style-bearing prop pair out
//! of element properties; [`merged_style`] resolves the `sx` part and
//! overlays raw style overrides. The theme is threaded explicitly, never
//! read from ambient state.

mod props;
mod style;
mod theme;
mod util;

pub use props::{merged_style, StyleProps};
pub use style::{alias_for, resolve, scale_for, Style, StyleFn, StyleMap, StyleValue};
pub use theme::{default_theme, set_theme_detector, AdaptiveTheme, ColorMode, Theme, ThemeChoice};
pub use util::{get, get_or, parse_number};
