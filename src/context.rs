//! The application-root object tying the store to an environment.

use std::rc::Rc;

use crate::config::{Config, ConfigPatch, ConfigStore, Subscription};
use crate::environment::{Environment, HostEnvironment};
use crate::scaling::{ScaleTarget, Scaling, TextScaleMode};
use crate::skin::SkinRegistry;
use crate::text::{compose_text_style, resolve_text_config, ResolvedTextConfig, TextProps, TextStyle};
use crate::theme::{Theme, ThemeMode};
use crate::typography::{base_font_size, font_size, FontSizeName};

/// Owns the configuration store and the device environment.
///
/// Create one at the application root and pass it by reference to whatever
/// renders text. Every accessor reads the current configuration and
/// environment, so results always reflect the latest `configure` call.
///
/// # Example
///
/// ```rust
/// use textskin::{ColorMode, ConfigPatch, FixedEnvironment, FontWeight, TextProps, ThemeMode, UiContext};
///
/// let ui = UiContext::new(FixedEnvironment::new(ColorMode::Dark, 1.0, false));
/// ui.configure(&ConfigPatch::new().base_font_size(16.0));
///
/// let resolved = ui.resolve_text(&TextProps::new().skin("medium-bold"));
/// assert_eq!(resolved.font_size, 16.0);
/// assert_eq!(resolved.font_weight, Some(FontWeight::BOLD));
/// assert_eq!(resolved.color, "#F8FAFC");
///
/// ui.set_theme(ThemeMode::Light);
/// assert_eq!(ui.theme().mode(), ColorMode::Light);
/// ```
#[derive(Debug, Clone)]
pub struct UiContext<E: Environment = HostEnvironment> {
    store: ConfigStore,
    environment: E,
}

impl<E: Environment> UiContext<E> {
    /// Creates a context with a fresh default configuration.
    pub fn new(environment: E) -> Self {
        Self::with_store(ConfigStore::new(), environment)
    }

    /// Creates a context around an existing store.
    pub fn with_store(store: ConfigStore, environment: E) -> Self {
        Self { store, environment }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.environment
    }

    pub fn config(&self) -> Rc<Config> {
        self.store.config()
    }

    pub fn configure(&self, patch: &ConfigPatch) -> Rc<Config> {
        self.store.configure(patch)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Rc<Config> {
        self.store.set_theme(theme)
    }

    pub fn set_custom_text_scale(&self, multiplier: f32) -> Rc<Config> {
        self.store.set_custom_text_scale(multiplier)
    }

    pub fn set_ui_scale(&self, multiplier: f32) -> Rc<Config> {
        self.store.set_ui_scale(multiplier)
    }

    pub fn set_text_scale_mode(&self, mode: TextScaleMode) -> Rc<Config> {
        self.store.set_text_scale_mode(mode)
    }

    /// The theme in effect: the configured mode, or the system scheme for `auto`.
    pub fn theme(&self) -> Theme {
        Theme::resolve(self.config().theme, self.environment.color_scheme())
    }

    /// Pins the theme to the opposite of the one currently in effect.
    pub fn toggle_theme(&self) -> Rc<Config> {
        let next = self.theme().mode().toggled();
        self.set_theme(next.into())
    }

    /// Looks up a color in the current theme's palette.
    pub fn color(&self, key: &str) -> &'static str {
        self.theme().color(key)
    }

    pub fn scaling(&self) -> Scaling {
        Scaling::resolve(&self.config().scaling, self.environment.font_scale())
    }

    /// Multiplies `value` by the current text or UI scale.
    pub fn scale(&self, value: f32, target: ScaleTarget) -> f32 {
        self.scaling().scale(value, target)
    }

    /// Pixel size of `medium` for this device and configuration.
    pub fn base_font_size(&self) -> f32 {
        base_font_size(&self.config().text, self.environment.is_large_screen())
    }

    /// Unscaled pixel size of a named font size.
    pub fn font_size(&self, name: FontSizeName) -> f32 {
        font_size(name, self.base_font_size())
    }

    /// Skin lookup over the current configuration.
    pub fn skins(&self) -> SkinRegistry {
        SkinRegistry::new(self.config())
    }

    /// Resolves the font attributes of a text instance.
    pub fn resolve_text(&self, props: &TextProps) -> ResolvedTextConfig {
        let config = self.config();
        resolve_text_config(
            props,
            &config.text,
            &self.theme(),
            &self.scaling(),
            base_font_size(&config.text, self.environment.is_large_screen()),
        )
    }

    /// Resolves and composes the full style of a text instance.
    pub fn text_style(&self, props: &TextProps) -> TextStyle {
        let resolved = self.resolve_text(props);
        compose_text_style(props, &resolved, &self.config().text)
    }
}

impl Default for UiContext<HostEnvironment> {
    fn default() -> Self {
        Self::new(HostEnvironment::default())
    }
}
