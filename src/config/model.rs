//! The configuration tree and its defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::patch::{ConfigPatch, ScalingPatch, TextPatch, TextScalePatch, UiScalePatch};
use crate::merge::{deep_merge, merge_leaf, merge_map, merge_optional, Merge};
use crate::scaling::TextScaleMode;
use crate::skin::FontWeight;
use crate::theme::ThemeMode;

/// The complete configuration.
///
/// Every field has a default, so `Config::default()` is a usable
/// configuration and a patch only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub theme: ThemeMode,
    pub scaling: ScalingConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalingConfig {
    pub text_scale: TextScaleConfig,
    pub ui_scale: UiScaleConfig,
}

/// How text sizes react to the device font scale and the custom multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextScaleConfig {
    pub mode: TextScaleMode,
    pub custom_multiplier: f32,
    /// Carried for configuration compatibility; `mode` alone decides whether
    /// the device scale is applied.
    pub respect_native: bool,
}

impl Default for TextScaleConfig {
    fn default() -> Self {
        Self {
            mode: TextScaleMode::default(),
            custom_multiplier: 1.0,
            respect_native: true,
        }
    }
}

/// Multiplier for spacing and other non-text dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiScaleConfig {
    /// Whether callers should apply `multiplier`. The multiplier is reported
    /// either way.
    pub enabled: bool,
    pub multiplier: f32,
}

impl Default for UiScaleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            multiplier: 1.0,
        }
    }
}

/// Typography settings shared by every text instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextConfig {
    /// Pixel size of `medium`. When unset the device class decides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_font_size: Option<f32>,
    pub ratio: f32,
    pub default_skin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// User-registered skins by name.
    pub skins: BTreeMap<String, SkinDefinition>,
    /// Style overrides keyed by the skin name a text instance asks for.
    pub overrides: BTreeMap<String, StylePatch>,
}

pub const DEFAULT_SKIN: &str = "medium";

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            base_font_size: None,
            ratio: 1.0,
            default_skin: DEFAULT_SKIN.to_string(),
            color: None,
            skins: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }
}

/// A custom skin registered through configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkinDefinition {
    /// Skin whose size and weight this one borrows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_skin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StylePatch>,
}

impl SkinDefinition {
    /// A definition that borrows size and weight from `base_skin`.
    pub fn based_on(base_skin: impl Into<String>) -> Self {
        Self {
            base_skin: Some(base_skin.into()),
            ..Self::default()
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn styles(mut self, styles: StylePatch) -> Self {
        self.styles = Some(styles);
        self
    }
}

impl Merge for SkinDefinition {
    type Patch = SkinDefinition;

    fn merged(&self, patch: &SkinDefinition) -> Self {
        let styles = match (&self.styles, &patch.styles) {
            (Some(current), Some(incoming)) => Some(current.merged(incoming)),
            (current, incoming) => merge_optional(current, incoming),
        };
        Self {
            base_skin: merge_optional(&self.base_skin, &patch.base_skin),
            font_size: merge_optional(&self.font_size, &patch.font_size),
            color: merge_optional(&self.color, &patch.color),
            styles,
        }
    }
}

/// A set of named style properties.
///
/// The properties the resolver understands are typed; everything else a
/// host style system accepts (`letterSpacing`, `lineHeight`, ...) is kept in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets an arbitrary host style property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.color.is_none()
            && self.font_weight.is_none()
            && self.font_family.is_none()
            && self.extra.is_empty()
    }
}

impl Merge for StylePatch {
    type Patch = StylePatch;

    fn merged(&self, patch: &StylePatch) -> Self {
        let extra = match deep_merge(
            &Value::Object(self.extra.clone()),
            &Value::Object(patch.extra.clone()),
        ) {
            Value::Object(map) => map,
            _ => self.extra.clone(),
        };
        Self {
            font_size: merge_optional(&self.font_size, &patch.font_size),
            color: merge_optional(&self.color, &patch.color),
            font_weight: merge_optional(&self.font_weight, &patch.font_weight),
            font_family: merge_optional(&self.font_family, &patch.font_family),
            extra,
        }
    }
}

impl Merge for Config {
    type Patch = ConfigPatch;

    fn merged(&self, patch: &ConfigPatch) -> Self {
        Self {
            theme: merge_leaf(&self.theme, &patch.theme),
            scaling: match &patch.scaling {
                Some(scaling) => self.scaling.merged(scaling),
                None => self.scaling.clone(),
            },
            text: match &patch.text {
                Some(text) => self.text.merged(text),
                None => self.text.clone(),
            },
        }
    }
}

impl Merge for ScalingConfig {
    type Patch = ScalingPatch;

    fn merged(&self, patch: &ScalingPatch) -> Self {
        Self {
            text_scale: match &patch.text_scale {
                Some(text_scale) => self.text_scale.merged(text_scale),
                None => self.text_scale.clone(),
            },
            ui_scale: match &patch.ui_scale {
                Some(ui_scale) => self.ui_scale.merged(ui_scale),
                None => self.ui_scale.clone(),
            },
        }
    }
}

impl Merge for TextScaleConfig {
    type Patch = TextScalePatch;

    fn merged(&self, patch: &TextScalePatch) -> Self {
        Self {
            mode: merge_leaf(&self.mode, &patch.mode),
            custom_multiplier: merge_leaf(&self.custom_multiplier, &patch.custom_multiplier),
            respect_native: merge_leaf(&self.respect_native, &patch.respect_native),
        }
    }
}

impl Merge for UiScaleConfig {
    type Patch = UiScalePatch;

    fn merged(&self, patch: &UiScalePatch) -> Self {
        Self {
            enabled: merge_leaf(&self.enabled, &patch.enabled),
            multiplier: merge_leaf(&self.multiplier, &patch.multiplier),
        }
    }
}

impl Merge for TextConfig {
    type Patch = TextPatch;

    fn merged(&self, patch: &TextPatch) -> Self {
        Self {
            base_font_size: merge_optional(&self.base_font_size, &patch.base_font_size),
            ratio: merge_leaf(&self.ratio, &patch.ratio),
            default_skin: merge_leaf(&self.default_skin, &patch.default_skin),
            color: merge_optional(&self.color, &patch.color),
            skins: match &patch.skins {
                Some(skins) => merge_map(&self.skins, skins),
                None => self.skins.clone(),
            },
            overrides: match &patch.overrides {
                Some(overrides) => merge_map(&self.overrides, overrides),
                None => self.overrides.clone(),
            },
        }
    }
}
