//! Skins: named presets combining a size category and a weight.
//!
//! This module provides:
//!
//! - [`parse_skin`]: splits `"large-bold"` into [`SkinSize`] and [`FontWeight`]
//! - [`SkinWeight`] / [`FontWeight`]: the weight categories and their numeric values
//! - [`SkinRegistry`]: lookup over built-in and user-registered skins

mod parse;
mod registry;
mod weight;

pub use parse::{parse_skin, ParsedSkin, SkinSize};
pub use registry::{builtin_skin_names, SkinRegistry};
pub use weight::{FontWeight, SkinWeight};
