//! The resolved theme handed to style resolution.

use super::mode::{ColorMode, ThemeMode};
use super::palette::Palette;

/// A theme resolved to a concrete color mode.
///
/// Built from the configured [`ThemeMode`] and the system color scheme;
/// `Auto` follows the system, anything else is taken verbatim.
///
/// # Example
///
/// ```rust
/// use textskin::{ColorMode, Theme, ThemeMode};
///
/// let theme = Theme::resolve(ThemeMode::Auto, ColorMode::Dark);
/// assert!(theme.is_dark());
/// assert_eq!(theme.text_primary(), "#F8FAFC");
///
/// let pinned = Theme::resolve(ThemeMode::Light, ColorMode::Dark);
/// assert_eq!(pinned.mode(), ColorMode::Light);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    mode: ColorMode,
    palette: &'static Palette,
}

impl Theme {
    /// Creates a theme for a concrete mode.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            palette: Palette::for_mode(mode),
        }
    }

    /// Resolves a configured setting against the system color scheme.
    pub fn resolve(setting: ThemeMode, system: ColorMode) -> Self {
        Self::new(setting.effective(system))
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ColorMode::Dark
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    /// Looks up a palette color, see [`get_color`](super::get_color).
    pub fn color(&self, key: &str) -> &'static str {
        self.palette.color(key)
    }

    /// Default text color for this theme.
    pub fn text_primary(&self) -> &'static str {
        self.palette.text_primary()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
    }
}

impl Eq for Theme {}
