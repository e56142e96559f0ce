//! # textskin
//!
//! Style resolution for a skinned `Text` primitive on mobile UI hosts, with
//! light/dark theming and accessibility-aware scaling, all driven by a single
//! mergeable configuration.
//!
//! ## Overview
//!
//! - **Skins** name a size and a weight: `"large-bold"`, `"small"`,
//!   `"extra-large-extra-light"`. Custom skins registered in configuration can
//!   borrow a built-in skin and add their own size, color and styles.
//! - **Themes** pick a light or dark palette, pinned or following the system.
//! - **Scaling** combines the device font scale with a custom multiplier for
//!   text, and keeps an independent multiplier for UI dimensions.
//! - **Configuration** is one tree with defaults everywhere. It changes only
//!   by merging patches through [`ConfigStore::configure`], which notifies
//!   subscribers synchronously.
//!
//! ## Quick start
//!
//! ```rust
//! use textskin::{
//!     ColorMode, ConfigPatch, FixedEnvironment, SkinDefinition, StylePatch, TextProps, UiContext,
//! };
//!
//! let ui = UiContext::new(FixedEnvironment::new(ColorMode::Light, 1.0, false));
//! ui.configure(
//!     &ConfigPatch::new()
//!         .custom_text_scale(1.5)
//!         .skin("heading", SkinDefinition::based_on("extra-large-bold"))
//!         .override_skin("heading", StylePatch::new().font_family("Inter-Bold")),
//! );
//!
//! let heading = ui.resolve_text(&TextProps::new().skin("heading"));
//! assert!((heading.font_size - 14.0 * 1.286 * 1.5).abs() < 1e-3);
//! assert_eq!(heading.font_family.as_deref(), Some("Inter-Bold"));
//! ```
//!
//! ## Host integration
//!
//! The crate never touches a UI toolkit. Device signals come in through the
//! [`Environment`] trait ([`HostEnvironment`] reads the OS color scheme and
//! takes font scale and screen size from the embedder); results go out as
//! [`ResolvedTextConfig`] and [`TextStyle`], the latter convertible to a
//! camelCase property object with [`TextStyle::to_value`].
//!
//! ## Diagnostics
//!
//! Bad input never fails resolution. Unknown skin names and color keys fall
//! back to defaults and emit `tracing` warnings; store updates emit debug
//! events. Install any `tracing` subscriber to see them.

pub mod config;
mod context;
mod environment;
mod merge;
pub mod scaling;
pub mod skin;
pub mod text;
pub mod theme;
mod typography;

pub use config::{
    Config, ConfigError, ConfigPatch, ConfigStore, ScalingConfig, SkinDefinition, StylePatch,
    Subscription, TextConfig,
};
pub use context::UiContext;
pub use environment::{
    Environment, FixedEnvironment, HostEnvironment, ScreenSize, LARGE_SCREEN_MIN_DIMENSION,
};
pub use merge::{deep_merge, Merge};
pub use scaling::{effective_text_scale, ScaleTarget, Scaling, TextScaleMode};
pub use skin::{builtin_skin_names, parse_skin, FontWeight, ParsedSkin, SkinRegistry, SkinSize, SkinWeight};
pub use text::{
    compose_text_style, resolve_text_config, ResolvedTextConfig, Spacing, TextAlign, TextProps,
    TextStyle,
};
pub use theme::{get_color, ColorMode, Palette, Theme, ThemeMode, MISSING_COLOR};
pub use typography::{
    base_font_size, font_size, FontSizeName, DEFAULT_BASE_FONT_SIZE, LARGE_SCREEN_BASE_FONT_SIZE,
};
