//! Text and UI scaling.
//!
//! Text sizes combine the device accessibility font scale with a custom
//! multiplier according to a [`TextScaleMode`]. UI dimensions use a single
//! independent multiplier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ScalingConfig};

/// How the device font scale and the custom multiplier combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScaleMode {
    /// Device font scale only.
    Native,
    /// Custom multiplier only.
    Custom,
    /// Device font scale times the custom multiplier.
    #[default]
    Both,
}

impl TextScaleMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TextScaleMode::Native => "native",
            TextScaleMode::Custom => "custom",
            TextScaleMode::Both => "both",
        }
    }
}

impl fmt::Display for TextScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextScaleMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(TextScaleMode::Native),
            "custom" => Ok(TextScaleMode::Custom),
            "both" => Ok(TextScaleMode::Both),
            other => Err(ConfigError::invalid_value("text scale mode", other)),
        }
    }
}

/// Which scale a value should follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleTarget {
    #[default]
    Text,
    Ui,
}

/// Combines the device and custom text scales.
pub fn effective_text_scale(mode: TextScaleMode, native: f32, custom: f32) -> f32 {
    match mode {
        TextScaleMode::Native => native,
        TextScaleMode::Custom => custom,
        TextScaleMode::Both => native * custom,
    }
}

/// Replaces a device font scale that is negative or not finite with 1.0.
pub fn sanitize_native_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale >= 0.0 {
        scale
    } else {
        tracing::warn!(scale, "unusable native font scale, using 1.0");
        1.0
    }
}

/// Scaling values resolved from configuration and the device font scale.
///
/// # Example
///
/// ```rust
/// use textskin::{ScaleTarget, Scaling, ScalingConfig};
///
/// let mut config = ScalingConfig::default();
/// config.text_scale.custom_multiplier = 1.2;
/// config.ui_scale.multiplier = 0.9;
///
/// let scaling = Scaling::resolve(&config, 1.3);
/// assert!((scaling.effective_text_scale() - 1.56).abs() < 1e-5);
/// assert!((scaling.scale(20.0, ScaleTarget::Ui) - 18.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    native_font_scale: f32,
    custom_text_scale: f32,
    mode: TextScaleMode,
    ui_scale: f32,
    ui_scale_enabled: bool,
}

impl Scaling {
    /// Resolves scaling from configuration and the device font scale.
    pub fn resolve(config: &ScalingConfig, native_font_scale: f32) -> Self {
        Self {
            native_font_scale: sanitize_native_scale(native_font_scale),
            custom_text_scale: config.text_scale.custom_multiplier,
            mode: config.text_scale.mode,
            ui_scale: config.ui_scale.multiplier,
            ui_scale_enabled: config.ui_scale.enabled,
        }
    }

    pub fn native_font_scale(&self) -> f32 {
        self.native_font_scale
    }

    pub fn custom_text_scale(&self) -> f32 {
        self.custom_text_scale
    }

    pub fn mode(&self) -> TextScaleMode {
        self.mode
    }

    /// The configured UI multiplier, whether or not UI scaling is enabled.
    pub fn ui_scale(&self) -> f32 {
        self.ui_scale
    }

    /// Whether callers should apply the UI scale at all.
    pub fn ui_scale_enabled(&self) -> bool {
        self.ui_scale_enabled
    }

    pub fn effective_text_scale(&self) -> f32 {
        effective_text_scale(self.mode, self.native_font_scale, self.custom_text_scale)
    }

    /// Same as [`ui_scale`](Self::ui_scale); callers check
    /// [`ui_scale_enabled`](Self::ui_scale_enabled) separately.
    pub fn effective_ui_scale(&self) -> f32 {
        self.ui_scale
    }

    /// Multiplies `value` by the effective scale for `target`.
    pub fn scale(&self, value: f32, target: ScaleTarget) -> f32 {
        match target {
            ScaleTarget::Text => value * self.effective_text_scale(),
            ScaleTarget::Ui => value * self.effective_ui_scale(),
        }
    }
}

impl Default for Scaling {
    fn default() -> Self {
        Self::resolve(&ScalingConfig::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_effective_text_scale_modes() {
        assert!(close(effective_text_scale(TextScaleMode::Both, 1.3, 1.2), 1.56));
        assert!(close(effective_text_scale(TextScaleMode::Native, 1.3, 1.2), 1.3));
        assert!(close(effective_text_scale(TextScaleMode::Custom, 1.3, 1.2), 1.2));
    }

    #[test]
    fn test_ui_scale_ignores_enabled_flag() {
        let mut config = ScalingConfig::default();
        config.ui_scale.enabled = false;
        config.ui_scale.multiplier = 1.25;

        let scaling = Scaling::resolve(&config, 1.0);
        assert!(!scaling.ui_scale_enabled());
        assert!(close(scaling.effective_ui_scale(), 1.25));
        assert!(close(scaling.scale(8.0, ScaleTarget::Ui), 10.0));
    }

    #[test]
    fn test_scale_text_target() {
        let mut config = ScalingConfig::default();
        config.text_scale.mode = TextScaleMode::Custom;
        config.text_scale.custom_multiplier = 1.5;

        let scaling = Scaling::resolve(&config, 2.0);
        assert!(close(scaling.scale(10.0, ScaleTarget::Text), 15.0));
    }

    #[test]
    fn test_default_scaling_is_identity() {
        let scaling = Scaling::default();
        assert!(close(scaling.effective_text_scale(), 1.0));
        assert!(close(scaling.effective_ui_scale(), 1.0));
    }

    #[test]
    fn test_sanitize_native_scale() {
        assert_eq!(sanitize_native_scale(1.3), 1.3);
        assert_eq!(sanitize_native_scale(0.0), 0.0);
        assert_eq!(sanitize_native_scale(-1.0), 1.0);
        assert_eq!(sanitize_native_scale(f32::NAN), 1.0);
        assert_eq!(sanitize_native_scale(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_text_scale_mode_from_str() {
        assert_eq!("native".parse::<TextScaleMode>().unwrap(), TextScaleMode::Native);
        assert!("all".parse::<TextScaleMode>().is_err());
    }
}
