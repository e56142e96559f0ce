//! Partial configuration applied through [`ConfigStore::configure`].
//!
//! A [`ConfigPatch`] mirrors [`Config`] with every leaf optional. It can be
//! built in code with the fluent methods below, or read from JSON/YAML using
//! the same camelCase keys the serialized [`Config`] uses:
//!
//! ```yaml
//! theme: dark
//! scaling:
//!   textScale:
//!     mode: both
//!     customMultiplier: 1.2
//! text:
//!   baseFontSize: 16
//!   overrides:
//!     large-bold:
//!       fontFamily: Inter-Bold
//! ```
//!
//! Unknown keys are ignored.
//!
//! [`ConfigStore::configure`]: super::ConfigStore::configure
//! [`Config`]: super::Config

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::model::{SkinDefinition, StylePatch};
use crate::scaling::TextScaleMode;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling: Option<ScalingPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextPatch>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScalingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_scale: Option<TextScalePatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_scale: Option<UiScalePatch>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextScalePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TextScaleMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respect_native: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiScalePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_skin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skins: Option<BTreeMap<String, SkinDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BTreeMap<String, StylePatch>>,
}

impl ConfigPatch {
    /// Creates an empty patch. Applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a patch from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a patch from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads a patch from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Whether applying this patch would leave every field untouched.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn theme(mut self, theme: ThemeMode) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn text_scale_mode(mut self, mode: TextScaleMode) -> Self {
        self.text_scale_mut().mode = Some(mode);
        self
    }

    pub fn custom_text_scale(mut self, multiplier: f32) -> Self {
        self.text_scale_mut().custom_multiplier = Some(multiplier);
        self
    }

    pub fn respect_native(mut self, respect: bool) -> Self {
        self.text_scale_mut().respect_native = Some(respect);
        self
    }

    pub fn ui_scale(mut self, multiplier: f32) -> Self {
        self.ui_scale_mut().multiplier = Some(multiplier);
        self
    }

    pub fn ui_scale_enabled(mut self, enabled: bool) -> Self {
        self.ui_scale_mut().enabled = Some(enabled);
        self
    }

    pub fn base_font_size(mut self, size: f32) -> Self {
        self.text_mut().base_font_size = Some(size);
        self
    }

    pub fn ratio(mut self, ratio: f32) -> Self {
        self.text_mut().ratio = Some(ratio);
        self
    }

    pub fn default_skin(mut self, skin: impl Into<String>) -> Self {
        self.text_mut().default_skin = Some(skin.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_mut().color = Some(color.into());
        self
    }

    /// Registers (or patches) a custom skin.
    pub fn skin(mut self, name: impl Into<String>, definition: SkinDefinition) -> Self {
        self.text_mut()
            .skins
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), definition);
        self
    }

    /// Adds (or patches) style overrides for a skin name.
    pub fn override_skin(mut self, name: impl Into<String>, styles: StylePatch) -> Self {
        self.text_mut()
            .overrides
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), styles);
        self
    }

    fn text_mut(&mut self) -> &mut TextPatch {
        self.text.get_or_insert_with(TextPatch::default)
    }

    fn scaling_mut(&mut self) -> &mut ScalingPatch {
        self.scaling.get_or_insert_with(ScalingPatch::default)
    }

    fn text_scale_mut(&mut self) -> &mut TextScalePatch {
        self.scaling_mut()
            .text_scale
            .get_or_insert_with(TextScalePatch::default)
    }

    fn ui_scale_mut(&mut self) -> &mut UiScalePatch {
        self.scaling_mut()
            .ui_scale
            .get_or_insert_with(UiScalePatch::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_touches_only_named_leaves() {
        let patch = ConfigPatch::new().custom_text_scale(1.2);
        let text_scale = patch.scaling.as_ref().unwrap().text_scale.as_ref().unwrap();
        assert_eq!(text_scale.custom_multiplier, Some(1.2));
        assert_eq!(text_scale.mode, None);
        assert!(patch.scaling.as_ref().unwrap().ui_scale.is_none());
        assert!(patch.theme.is_none());
        assert!(patch.text.is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(ConfigPatch::new().is_empty());
        assert!(!ConfigPatch::new().theme(ThemeMode::Light).is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let patch = ConfigPatch::from_json_str(
            r##"{
                "theme": "dark",
                "scaling": { "textScale": { "mode": "custom", "customMultiplier": 1.2 } },
                "text": {
                    "baseFontSize": 16,
                    "skins": { "heading": { "baseSkin": "extra-large-bold", "color": "#101010" } }
                }
            }"##,
        )
        .unwrap();

        assert_eq!(patch.theme, Some(ThemeMode::Dark));
        let text_scale = patch.scaling.unwrap().text_scale.unwrap();
        assert_eq!(text_scale.mode, Some(TextScaleMode::Custom));
        assert_eq!(text_scale.custom_multiplier, Some(1.2));
        let text = patch.text.unwrap();
        assert_eq!(text.base_font_size, Some(16.0));
        let heading = &text.skins.unwrap()["heading"];
        assert_eq!(heading.base_skin.as_deref(), Some("extra-large-bold"));
    }

    #[test]
    fn test_from_yaml_str() {
        let patch = ConfigPatch::from_yaml_str(
            "theme: light\nscaling:\n  uiScale:\n    multiplier: 0.9\ntext:\n  overrides:\n    large-bold:\n      fontFamily: Inter-Bold\n      fontSize: 20\n",
        )
        .unwrap();

        assert_eq!(patch.theme, Some(ThemeMode::Light));
        assert_eq!(patch.scaling.unwrap().ui_scale.unwrap().multiplier, Some(0.9));
        let overrides = patch.text.unwrap().overrides.unwrap();
        assert_eq!(overrides["large-bold"].font_family.as_deref(), Some("Inter-Bold"));
        assert_eq!(overrides["large-bold"].font_size, Some(20.0));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let patch = ConfigPatch::from_json_str(r#"{ "text": { "types": { "heading": {} } } }"#).unwrap();
        assert_eq!(patch.text, Some(TextPatch::default()));
    }

    #[test]
    fn test_invalid_enum_value_is_an_error() {
        let err = ConfigPatch::from_json_str(r#"{ "theme": "sepia" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_path_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "theme: dark").unwrap();
        let patch = ConfigPatch::from_path(file.path()).unwrap();
        assert_eq!(patch.theme, Some(ThemeMode::Dark));

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "text": {{ "ratio": 1.5 }} }}"#).unwrap();
        let patch = ConfigPatch::from_path(file.path()).unwrap();
        assert_eq!(patch.text.unwrap().ratio, Some(1.5));
    }

    #[test]
    fn test_from_path_errors() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            ConfigPatch::from_path(file.path()),
            Err(ConfigError::UnsupportedFormat { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ConfigPatch::from_path(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
