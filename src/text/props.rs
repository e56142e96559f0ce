//! Per-instance text options.

use serde::{Deserialize, Serialize};

use crate::config::StylePatch;

/// Opacity applied while a pressable text is held down, unless overridden.
pub const DEFAULT_PRESSED_OPACITY: f32 = 0.6;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Margin or padding shorthands.
///
/// `all` sets every side, `horizontal`/`vertical` set a pair, and the side
/// fields set one edge. The host resolves overlaps, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacing {
    pub all: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub horizontal: Option<f32>,
    pub vertical: Option<f32>,
}

impl Spacing {
    /// Same value on every side.
    pub fn uniform(value: f32) -> Self {
        Self {
            all: Some(value),
            ..Self::default()
        }
    }

    /// Horizontal and vertical pairs.
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: Some(horizontal),
            vertical: Some(vertical),
            ..Self::default()
        }
    }

    /// `(suffix, value)` for every set field, in host property order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("", self.all),
            ("Top", self.top),
            ("Bottom", self.bottom),
            ("Left", self.left),
            ("Right", self.right),
            ("Horizontal", self.horizontal),
            ("Vertical", self.vertical),
        ]
        .into_iter()
        .filter_map(|(suffix, value)| value.map(|v| (suffix, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Spacing::uniform(value)
    }
}

/// Options for one text instance.
///
/// Everything is optional; an empty `TextProps` renders the configured
/// default skin.
///
/// # Example
///
/// ```rust
/// use textskin::{TextAlign, TextProps};
///
/// let props = TextProps::new()
///     .skin("large-bold")
///     .color("#333333")
///     .align(TextAlign::Center)
///     .margin(8.0);
/// assert_eq!(props.skin.as_deref(), Some("large-bold"));
/// assert!(!props.is_pressable());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProps {
    /// Built-in skin name (`"medium-bold"`) or a custom skin name.
    pub skin: Option<String>,
    /// Explicit font size, ahead of every configured size.
    pub size: Option<f32>,
    pub color: Option<String>,
    /// Multiplier replacing the configured ratio.
    pub ratio: Option<f32>,
    /// Skip text scaling for this instance.
    pub disable_scaling: bool,
    pub align: Option<TextAlign>,
    pub margin: Option<Spacing>,
    pub padding: Option<Spacing>,
    /// Host styles applied last.
    pub text_styles: Option<StylePatch>,
    /// Whether a press handler is attached.
    pub pressable: bool,
    /// Opacity while pressed.
    pub opacity: Option<f32>,
    /// Line limit handed to the host; `None` means unlimited.
    pub number_of_lines: Option<u32>,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skin(mut self, skin: impl Into<String>) -> Self {
        self.skin = Some(skin.into());
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn ratio(mut self, ratio: f32) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn disable_scaling(mut self, disable: bool) -> Self {
        self.disable_scaling = disable;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn margin(mut self, margin: impl Into<Spacing>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn text_styles(mut self, styles: StylePatch) -> Self {
        self.text_styles = Some(styles);
        self
    }

    pub fn pressable(mut self, pressable: bool) -> Self {
        self.pressable = pressable;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn number_of_lines(mut self, lines: u32) -> Self {
        self.number_of_lines = Some(lines);
        self
    }

    /// Whether the host should wrap the text in a press target.
    ///
    /// A press handler or a non-zero opacity turns the wrapper on.
    pub fn is_pressable(&self) -> bool {
        self.pressable || self.opacity.is_some_and(|opacity| opacity != 0.0)
    }

    /// Opacity to show while pressed.
    pub fn pressed_opacity(&self) -> f32 {
        self.opacity.unwrap_or(DEFAULT_PRESSED_OPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_entries_skip_unset() {
        let spacing = Spacing {
            top: Some(4.0),
            horizontal: Some(12.0),
            ..Spacing::default()
        };
        let entries: Vec<_> = spacing.entries().collect();
        assert_eq!(entries, vec![("Top", 4.0), ("Horizontal", 12.0)]);
        assert!(Spacing::default().is_empty());
    }

    #[test]
    fn test_spacing_shorthands() {
        assert_eq!(Spacing::from(8.0).all, Some(8.0));
        let symmetric = Spacing::symmetric(16.0, 4.0);
        assert_eq!(symmetric.horizontal, Some(16.0));
        assert_eq!(symmetric.vertical, Some(4.0));
    }

    #[test]
    fn test_pressable() {
        assert!(!TextProps::new().is_pressable());
        assert!(TextProps::new().pressable(true).is_pressable());
        assert!(TextProps::new().opacity(0.3).is_pressable());
        assert!(!TextProps::new().opacity(0.0).is_pressable());
        assert!(TextProps::new().opacity(0.0).pressable(true).is_pressable());
        assert_eq!(TextProps::new().opacity(0.0).pressed_opacity(), 0.0);
        assert_eq!(TextProps::new().pressed_opacity(), 0.6);
        assert_eq!(TextProps::new().opacity(0.3).pressed_opacity(), 0.3);
    }
}
