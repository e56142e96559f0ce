//! Configuration: the typed tree, partial patches, and the store.
//!
//! This module provides:
//!
//! - [`Config`]: the full configuration with defaults for theme, scaling and text
//! - [`ConfigPatch`]: a partial configuration, built fluently or read from JSON/YAML
//! - [`ConfigStore`]: holds the current value, merges patches, notifies subscribers
//! - [`ConfigError`]: errors from reading patches or parsing enum values

mod error;
mod model;
mod patch;
mod store;

pub use error::ConfigError;
pub use model::{
    Config, ScalingConfig, SkinDefinition, StylePatch, TextConfig, TextScaleConfig, UiScaleConfig,
    DEFAULT_SKIN,
};
pub use patch::{ConfigPatch, ScalingPatch, TextPatch, TextScalePatch, UiScalePatch};
pub use store::{ConfigStore, Subscription};
