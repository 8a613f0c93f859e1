//! Style system: values, lookup tables, and the resolver.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleValue`]: A tagged union over scalar, nested, and dynamic values
//! - [`StyleMap`]: An insertion-ordered registry of style entries
//! - [`resolve`]: The theme-driven resolver producing a flat [`Style`]
//! - [`alias_for`] / [`scale_for`]: The static alias and scale tables
//!
//! Shorthand keys expand through the alias table, values resolve as tokens
//! against theme scales, and unknown keys or tokens pass through untouched.

mod resolve;
mod tables;
mod value;

pub use resolve::{resolve, Style};
pub use tables::{alias_for, scale_for};
pub use value::{StyleFn, StyleMap, StyleValue};
