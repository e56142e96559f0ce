//! Font sizes derived from a base size and a fixed multiplier table.

use crate::config::TextConfig;
use crate::skin::SkinSize;

/// Base size of `medium` on regular devices.
pub const DEFAULT_BASE_FONT_SIZE: f32 = 14.0;

/// Base size of `medium` on large-screen devices.
pub const LARGE_SCREEN_BASE_FONT_SIZE: f32 = 16.0;

/// Named font sizes: the five skin sizes plus three legacy names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSizeName {
    ExtraSmall,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    BrandTitle,
    Title,
    SubTitle,
}

impl FontSizeName {
    pub const ALL: [FontSizeName; 8] = [
        FontSizeName::ExtraSmall,
        FontSizeName::Small,
        FontSizeName::Medium,
        FontSizeName::Large,
        FontSizeName::ExtraLarge,
        FontSizeName::BrandTitle,
        FontSizeName::Title,
        FontSizeName::SubTitle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSizeName::ExtraSmall => "extra-small",
            FontSizeName::Small => "small",
            FontSizeName::Medium => "medium",
            FontSizeName::Large => "large",
            FontSizeName::ExtraLarge => "extra-large",
            FontSizeName::BrandTitle => "brandTitle",
            FontSizeName::Title => "title",
            FontSizeName::SubTitle => "subTitle",
        }
    }

    /// Ratio to the base size. `medium` is the 1.0 reference.
    pub fn multiplier(self) -> f32 {
        match self {
            FontSizeName::ExtraSmall => 0.714,
            FontSizeName::Small => 0.857,
            FontSizeName::Medium => 1.0,
            FontSizeName::Large => 1.143,
            FontSizeName::ExtraLarge => 1.286,
            FontSizeName::BrandTitle => 2.143,
            FontSizeName::Title => 1.857,
            FontSizeName::SubTitle => 1.429,
        }
    }

    /// Looks a name up, treating unknown names as `medium`.
    pub fn from_name(name: &str) -> Self {
        FontSizeName::ALL
            .into_iter()
            .find(|size| size.as_str() == name)
            .unwrap_or_default()
    }
}

impl From<SkinSize> for FontSizeName {
    fn from(size: SkinSize) -> Self {
        match size {
            SkinSize::ExtraSmall => FontSizeName::ExtraSmall,
            SkinSize::Small => FontSizeName::Small,
            SkinSize::Medium => FontSizeName::Medium,
            SkinSize::Large => FontSizeName::Large,
            SkinSize::ExtraLarge => FontSizeName::ExtraLarge,
        }
    }
}

/// The pixel size of `medium`.
///
/// A configured `baseFontSize` wins; otherwise large-screen devices get
/// [`LARGE_SCREEN_BASE_FONT_SIZE`] and everything else
/// [`DEFAULT_BASE_FONT_SIZE`].
pub fn base_font_size(text: &TextConfig, is_large_screen: bool) -> f32 {
    match text.base_font_size {
        Some(size) => size,
        None if is_large_screen => LARGE_SCREEN_BASE_FONT_SIZE,
        None => DEFAULT_BASE_FONT_SIZE,
    }
}

/// `base × multiplier(name)`.
pub fn font_size(name: impl Into<FontSizeName>, base: f32) -> f32 {
    base * name.into().multiplier()
}
