//! Parsing skin names into a size and an optional weight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::weight::{FontWeight, SkinWeight};
use crate::config::ConfigError;

/// The five ordered size categories a skin can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinSize {
    ExtraSmall,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl SkinSize {
    /// All sizes, smallest first.
    pub const ALL: [SkinSize; 5] = [
        SkinSize::ExtraSmall,
        SkinSize::Small,
        SkinSize::Medium,
        SkinSize::Large,
        SkinSize::ExtraLarge,
    ];

    /// The token used inside skin names.
    pub fn as_str(self) -> &'static str {
        match self {
            SkinSize::ExtraSmall => "extra-small",
            SkinSize::Small => "small",
            SkinSize::Medium => "medium",
            SkinSize::Large => "large",
            SkinSize::ExtraLarge => "extra-large",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        SkinSize::ALL.into_iter().find(|size| size.as_str() == token)
    }
}

impl fmt::Display for SkinSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinSize::from_token(s).ok_or_else(|| ConfigError::invalid_value("skin size", s))
    }
}

/// A skin name broken into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedSkin {
    pub size: SkinSize,
    /// `None` means the host's default weight.
    pub font_weight: Option<FontWeight>,
}

/// Parses a skin name such as `"large"` or `"extra-large-bold"`.
///
/// A bare size never implies a weight. Weight suffixes are tried from
/// lightest to heaviest and only count when what remains is a size. Anything
/// else logs a warning and falls back to `medium` with no weight, so this
/// never fails.
///
/// # Example
///
/// ```rust
/// use textskin::{parse_skin, FontWeight, SkinSize};
///
/// let parsed = parse_skin("extra-large-bold");
/// assert_eq!(parsed.size, SkinSize::ExtraLarge);
/// assert_eq!(parsed.font_weight, Some(FontWeight::BOLD));
///
/// assert_eq!(parse_skin("large").font_weight, None);
/// ```
pub fn parse_skin(skin: &str) -> ParsedSkin {
    if let Some(size) = SkinSize::from_token(skin) {
        return ParsedSkin {
            size,
            font_weight: None,
        };
    }

    for weight in SkinWeight::ALL {
        let Some(size_part) = skin
            .strip_suffix(weight.as_str())
            .and_then(|rest| rest.strip_suffix('-'))
        else {
            continue;
        };
        if let Some(size) = SkinSize::from_token(size_part) {
            return ParsedSkin {
                size,
                font_weight: Some(weight.font_weight()),
            };
        }
    }

    tracing::warn!(skin, "invalid skin format, defaulting to medium");
    ParsedSkin::default()
}
