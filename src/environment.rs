//! Device signals consumed by style resolution.
//!
//! The crate never talks to a UI host directly. Whatever embeds it supplies
//! an [`Environment`] describing the system color scheme, the accessibility
//! font scale and whether the screen counts as large.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use crate::theme::ColorMode;

/// Shortest screen side, in logical pixels, from which a screen counts as large.
pub const LARGE_SCREEN_MIN_DIMENSION: f32 = 600.0;

/// Source of the device signals style resolution depends on.
pub trait Environment {
    /// The system light/dark preference.
    fn color_scheme(&self) -> ColorMode;

    /// The accessibility font scale, 1.0 meaning unscaled.
    fn font_scale(&self) -> f32;

    /// Whether the device should use the larger base font size.
    fn is_large_screen(&self) -> bool;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn color_scheme(&self) -> ColorMode {
        (**self).color_scheme()
    }

    fn font_scale(&self) -> f32 {
        (**self).font_scale()
    }

    fn is_large_screen(&self) -> bool {
        (**self).is_large_screen()
    }
}

/// Screen dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Large when the shortest side reaches [`LARGE_SCREEN_MIN_DIMENSION`].
    pub fn is_large(&self) -> bool {
        self.width.min(self.height) >= LARGE_SCREEN_MIN_DIMENSION
    }
}

type ColorSchemeDetector = fn() -> ColorMode;

/// Environment backed by the host process.
///
/// The color scheme is detected from the operating system on every call.
/// Font scale and screen size are pushed in by the embedding application,
/// which knows them from its platform layer.
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    font_scale: f32,
    screen: ScreenSize,
    detector: ColorSchemeDetector,
}

impl HostEnvironment {
    pub fn new() -> Self {
        Self {
            font_scale: 1.0,
            screen: ScreenSize::default(),
            detector: os_color_scheme,
        }
    }

    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn with_screen(mut self, screen: ScreenSize) -> Self {
        self.screen = screen;
        self
    }

    /// Replaces OS detection, for tests or to force a scheme.
    pub fn with_color_scheme_detector(mut self, detector: ColorSchemeDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Updates the font scale after an accessibility settings change.
    pub fn set_font_scale(&mut self, font_scale: f32) {
        self.font_scale = font_scale;
    }

    /// Updates the screen size after a rotation or window resize.
    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for HostEnvironment {
    fn color_scheme(&self) -> ColorMode {
        (self.detector)()
    }

    fn font_scale(&self) -> f32 {
        self.font_scale
    }

    fn is_large_screen(&self) -> bool {
        self.screen.is_large()
    }
}

#[allow(unreachable_patterns)]
fn os_color_scheme() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
        _ => ColorMode::Light,
    }
}

/// Environment with pinned values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEnvironment {
    pub color_scheme: ColorMode,
    pub font_scale: f32,
    pub large_screen: bool,
}

impl FixedEnvironment {
    pub fn new(color_scheme: ColorMode, font_scale: f32, large_screen: bool) -> Self {
        Self {
            color_scheme,
            font_scale,
            large_screen,
        }
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::new(ColorMode::Light, 1.0, false)
    }
}

impl Environment for FixedEnvironment {
    fn color_scheme(&self) -> ColorMode {
        self.color_scheme
    }

    fn font_scale(&self) -> f32 {
        self.font_scale
    }

    fn is_large_screen(&self) -> bool {
        self.large_screen
    }
}
