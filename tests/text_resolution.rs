//! End-to-end resolution through `UiContext`.
//!
//! These tests drive configuration the way an application would, then check
//! the font attributes and styles a host would receive.

use textskin::{
    ColorMode, ConfigPatch, FixedEnvironment, FontWeight, SkinDefinition, StylePatch, TextProps,
    TextScaleMode, ThemeMode, UiContext,
};

fn phone(scheme: ColorMode, font_scale: f32) -> UiContext<FixedEnvironment> {
    UiContext::new(FixedEnvironment::new(scheme, font_scale, false))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_default_medium_bold() {
    let ui = phone(ColorMode::Light, 1.0);
    let resolved = ui.resolve_text(&TextProps::new().skin("medium-bold"));

    assert_eq!(resolved.font_size, 14.0);
    assert_eq!(resolved.font_weight, Some(FontWeight::BOLD));
    assert_eq!(resolved.color, ui.theme().text_primary());
    assert_eq!(resolved.font_family, None);
}

#[test]
fn test_tablet_uses_larger_base() {
    let ui = UiContext::new(FixedEnvironment::new(ColorMode::Light, 1.0, true));
    let resolved = ui.resolve_text(&TextProps::new().skin("medium-bold"));
    assert_eq!(resolved.font_size, 16.0);
}

#[test]
fn test_explicit_size_beats_every_configured_size() {
    let ui = phone(ColorMode::Light, 1.0);
    ui.configure(
        &ConfigPatch::new()
            .base_font_size(20.0)
            .skin("display", SkinDefinition::based_on("extra-large").font_size(40.0))
            .override_skin("display", StylePatch::new().font_size(36.0)),
    );

    let resolved = ui.resolve_text(&TextProps::new().skin("display").size(12.0));
    assert_eq!(resolved.font_size, 12.0);
}

#[test]
fn test_scaling_modes_apply_to_text() {
    let ui = phone(ColorMode::Light, 1.3);
    ui.set_custom_text_scale(1.2);

    let both = ui.resolve_text(&TextProps::new());
    assert!(close(both.font_size, 14.0 * 1.56));

    ui.set_text_scale_mode(TextScaleMode::Native);
    assert!(close(ui.resolve_text(&TextProps::new()).font_size, 14.0 * 1.3));

    ui.set_text_scale_mode(TextScaleMode::Custom);
    assert!(close(ui.resolve_text(&TextProps::new()).font_size, 14.0 * 1.2));

    let pinned = ui.resolve_text(&TextProps::new().disable_scaling(true));
    assert_eq!(pinned.font_size, 14.0);
}

#[test]
fn test_theme_switch_changes_default_color() {
    let ui = phone(ColorMode::Light, 1.0);
    assert_eq!(ui.resolve_text(&TextProps::new()).color, "#111827");

    ui.set_theme(ThemeMode::Dark);
    assert_eq!(ui.resolve_text(&TextProps::new()).color, "#F8FAFC");

    ui.configure(&ConfigPatch::new().text_color("#123456"));
    assert_eq!(ui.resolve_text(&TextProps::new()).color, "#123456");
}

#[test]
fn test_invalid_skin_degrades_to_medium() {
    let ui = phone(ColorMode::Light, 1.0);
    let resolved = ui.resolve_text(&TextProps::new().skin("not-a-skin"));
    assert_eq!(resolved.font_size, 14.0);
    assert_eq!(resolved.font_weight, None);
}

#[test]
fn test_configuration_from_yaml_drives_styles() {
    let ui = phone(ColorMode::Dark, 1.0);
    let patch = ConfigPatch::from_yaml_str(
        r##"
theme: auto
text:
  ratio: 1.1
  skins:
    caption:
      baseSkin: small-light
      styles:
        letterSpacing: 0.2
  overrides:
    caption:
      color: "#AAAAAA"
      fontFamily: Inter-Light
"##,
    )
    .unwrap();
    ui.configure(&patch);

    let style = ui.text_style(&TextProps::new().skin("caption"));
    assert!(close(style.font_size, 14.0 * 0.857 * 1.1));
    assert_eq!(style.color, "#AAAAAA");
    assert_eq!(style.font_weight, Some(FontWeight::LIGHT));
    assert_eq!(style.font_family.as_deref(), Some("Inter-Light"));

    let value = style.to_value();
    assert_eq!(value["letterSpacing"], serde_json::json!(0.2));
    assert_eq!(value["fontWeight"], serde_json::json!("300"));
}

#[test]
fn test_skin_registry_lists_custom_skins() {
    let ui = phone(ColorMode::Light, 1.0);
    ui.configure(&ConfigPatch::new().skin("hero", SkinDefinition::based_on("extra-large-extra-bold")));

    let skins = ui.skins();
    assert_eq!(skins.get("extraLargeExtraBold").as_deref(), Some("extra-large-extra-bold"));
    assert_eq!(skins.get("hero").as_deref(), Some("hero"));
    assert_eq!(skins.keys().last().map(String::as_str), Some("hero"));
}
