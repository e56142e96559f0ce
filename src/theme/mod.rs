//! Theme system: light/dark palettes selected by a configured mode.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: the configured setting (`light`, `dark`, `auto`)
//! - [`ColorMode`]: the concrete mode a setting resolves to
//! - [`Palette`] / [`get_color`]: the fixed color tables and lookup
//! - [`Theme`]: a resolved theme used during text resolution
//!
//! `auto` follows the system color scheme, which the crate reads through
//! [`Environment`](crate::Environment) rather than querying the OS directly.

mod mode;
mod palette;
#[allow(clippy::module_inception)]
mod theme;

pub use mode::{ColorMode, ThemeMode};
pub use palette::{color_keys, get_color, Palette, MISSING_COLOR, TEXT_PRIMARY};
pub use theme::Theme;
