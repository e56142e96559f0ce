//! Font weights: the named skin categories and the numeric style value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Weight category that can follow a size in a skin name (`large-bold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinWeight {
    ExtraLight,
    Light,
    Regular,
    Strong,
    Bold,
    ExtraBold,
}

impl SkinWeight {
    /// All weights, lightest first. Suffix matching walks this order.
    pub const ALL: [SkinWeight; 6] = [
        SkinWeight::ExtraLight,
        SkinWeight::Light,
        SkinWeight::Regular,
        SkinWeight::Strong,
        SkinWeight::Bold,
        SkinWeight::ExtraBold,
    ];

    /// The token used inside skin names.
    pub fn as_str(self) -> &'static str {
        match self {
            SkinWeight::ExtraLight => "extra-light",
            SkinWeight::Light => "light",
            SkinWeight::Regular => "regular",
            SkinWeight::Strong => "strong",
            SkinWeight::Bold => "bold",
            SkinWeight::ExtraBold => "extra-bold",
        }
    }

    /// Maps the category to the style value handed to the host.
    pub fn font_weight(self) -> FontWeight {
        match self {
            SkinWeight::ExtraLight => FontWeight::EXTRA_LIGHT,
            SkinWeight::Light => FontWeight::LIGHT,
            SkinWeight::Regular => FontWeight::REGULAR,
            SkinWeight::Strong => FontWeight::MEDIUM,
            SkinWeight::Bold => FontWeight::BOLD,
            SkinWeight::ExtraBold => FontWeight::EXTRA_BOLD,
        }
    }
}

impl fmt::Display for SkinWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinWeight {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinWeight::ALL
            .into_iter()
            .find(|weight| weight.as_str() == s)
            .ok_or_else(|| ConfigError::invalid_value("skin weight", s))
    }
}

/// A numeric font weight in the CSS sense (100 to 1000).
///
/// Deserializes from a number (`700`), a numeric string (`"700"`), or the
/// keywords `normal` and `bold`. Serializes as the numeric string most mobile
/// style systems expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "FontWeightRepr", into = "String")]
pub struct FontWeight(u16);

impl FontWeight {
    pub const EXTRA_LIGHT: FontWeight = FontWeight(200);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const EXTRA_BOLD: FontWeight = FontWeight(800);

    /// Creates a weight, rejecting values outside 1..=1000.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if (1..=1000).contains(&value) {
            Ok(FontWeight(value))
        } else {
            Err(ConfigError::invalid_value("font weight", value))
        }
    }

    /// The numeric weight.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FontWeight {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(FontWeight::REGULAR),
            "bold" => Ok(FontWeight::BOLD),
            other => other
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid_value("font weight", s))
                .and_then(FontWeight::new),
        }
    }
}

impl From<FontWeight> for String {
    fn from(weight: FontWeight) -> Self {
        weight.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FontWeightRepr {
    Number(u16),
    Text(String),
}

impl TryFrom<FontWeightRepr> for FontWeight {
    type Error = ConfigError;

    fn try_from(repr: FontWeightRepr) -> Result<Self, Self::Error> {
        match repr {
            FontWeightRepr::Number(value) => FontWeight::new(value),
            FontWeightRepr::Text(text) => text.parse(),
        }
    }
}
