//! Static lookup tables for alias, scale, negation, and fan-out resolution.
//!
//! These tables are process-wide constants: initialized once on first use and
//! never mutated. Their exact key sets are part of the crate's contract, since
//! themes written against one implementation must resolve identically in any
//! other.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Shorthand key to canonical property name.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bg", "backgroundColor"),
        ("m", "margin"),
        ("mt", "marginTop"),
        ("mr", "marginRight"),
        ("mb", "marginBottom"),
        ("ml", "marginLeft"),
        ("mx", "marginHorizontal"),
        ("my", "marginVertical"),
        ("marginX", "marginHorizontal"),
        ("marginY", "marginVertical"),
        ("p", "padding"),
        ("pt", "paddingTop"),
        ("pr", "paddingRight"),
        ("pb", "paddingBottom"),
        ("pl", "paddingLeft"),
        ("px", "paddingHorizontal"),
        ("py", "paddingVertical"),
        ("paddingX", "paddingHorizontal"),
        ("paddingY", "paddingVertical"),
    ])
});

/// Canonical property name to the theme scale used to resolve its values.
static SCALES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("width", "sizes"),
        ("height", "sizes"),
        ("bottom", "space"),
        ("end", "space"),
        ("left", "space"),
        ("right", "space"),
        ("start", "space"),
        ("top", "space"),
        ("minWidth", "sizes"),
        ("maxWidth", "sizes"),
        ("minHeight", "sizes"),
        ("maxHeight", "sizes"),
        ("margin", "space"),
        ("marginTop", "space"),
        ("marginRight", "space"),
        ("marginBottom", "space"),
        ("marginLeft", "space"),
        ("marginStart", "space"),
        ("marginEnd", "space"),
        ("marginHorizontal", "space"),
        ("marginVertical", "space"),
        ("padding", "space"),
        ("paddingTop", "space"),
        ("paddingRight", "space"),
        ("paddingBottom", "space"),
        ("paddingLeft", "space"),
        ("paddingStart", "space"),
        ("paddingEnd", "space"),
        ("paddingHorizontal", "space"),
        ("paddingVertical", "space"),
        ("paddingX", "space"),
        ("paddingY", "space"),
        ("borderWidth", "borderWidths"),
        ("borderTopWidth", "borderWidths"),
        ("borderRightWidth", "borderWidths"),
        ("borderBottomWidth", "borderWidths"),
        ("borderLeftWidth", "borderWidths"),
        ("borderEndWidth", "borderWidths"),
        ("borderStartWidth", "borderWidths"),
        ("zIndex", "zIndices"),
        ("shadowColor", "colors"),
        ("backgroundColor", "colors"),
        ("borderColor", "colors"),
        ("borderBottomColor", "colors"),
        ("borderEndColor", "colors"),
        ("borderLeftColor", "colors"),
        ("borderRightColor", "colors"),
        ("borderStartColor", "colors"),
        ("borderTopColor", "colors"),
        ("borderRadius", "radii"),
        ("borderBottomEndRadius", "radii"),
        ("borderBottomLeftRadius", "radii"),
        ("borderBottomRightRadius", "radii"),
        ("borderBottomStartRadius", "radii"),
        ("borderTopEndRadius", "radii"),
        ("borderTopLeftRadius", "radii"),
        ("borderTopRightRadius", "radii"),
        ("borderTopStartRadius", "radii"),
        ("color", "colors"),
        ("fontFamily", "fonts"),
        ("fontSize", "fontSizes"),
        ("fontWeight", "fontWeights"),
        ("textShadowColor", "colors"),
        ("letterSpacing", "letterSpacings"),
        ("lineHeight", "lineHeights"),
        ("textDecorationColor", "colors"),
        ("tintColor", "colors"),
        ("overlayColor", "colors"),
        ("flexBasis", "sizes"),
        ("size", "sizes"),
    ])
});

/// Properties whose negative numeric values resolve the absolute value
/// against the scale and re-negate the result.
static NEGATIVE_TRANSFORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "marginTop",
        "marginRight",
        "marginBottom",
        "marginLeft",
        "marginStart",
        "marginEnd",
        "marginHorizontal",
        "marginVertical",
        "top",
        "bottom",
        "left",
        "right",
        "start",
        "end",
    ])
});

/// Properties that fan a single resolved value out across several outputs.
static MULTIPLES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| HashMap::from([("size", &["width", "height"][..])]));

/// Properties exempt from numeric-string coercion.
const MAINTAIN_STRING: &[&str] = &["fontWeight"];

/// Returns the canonical property name for a shorthand alias.
///
/// # Example
///
/// ```rust
/// assert_eq!(restyle::alias_for("mt"), Some("marginTop"));
/// assert_eq!(restyle::alias_for("marginTop"), None);
/// ```
pub fn alias_for(key: &str) -> Option<&'static str> {
    ALIASES.get(key).copied()
}

/// Returns the theme scale assigned to a canonical property, if any.
///
/// # Example
///
/// ```rust
/// assert_eq!(restyle::scale_for("marginTop"), Some("space"));
/// assert_eq!(restyle::scale_for("opacity"), None);
/// ```
pub fn scale_for(property: &str) -> Option<&'static str> {
    SCALES.get(property).copied()
}

pub(crate) fn negates(property: &str) -> bool {
    NEGATIVE_TRANSFORMS.contains(property)
}

pub(crate) fn fan_out(property: &str) -> Option<&'static [&'static str]> {
    MULTIPLES.get(property).copied()
}

pub(crate) fn keeps_string(property: &str) -> bool {
    MAINTAIN_STRING.contains(&property)
}
