//! The final style object handed to the host for one text instance.

use serde_json::{Map, Value};

use super::props::{Spacing, TextAlign, TextProps};
use super::resolve::ResolvedTextConfig;
use crate::config::{StylePatch, TextConfig};
use crate::merge::Merge;
use crate::skin::FontWeight;

/// Style properties for one text instance.
///
/// Produced by [`compose_text_style`]; [`to_value`](Self::to_value) flattens
/// it into the camelCase property object mobile style systems consume.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: String,
    pub font_weight: Option<FontWeight>,
    pub font_family: Option<String>,
    pub text_align: TextAlign,
    pub margin: Spacing,
    pub padding: Spacing,
    pub number_of_lines: Option<u32>,
    /// Host properties this crate passes through untouched.
    pub extra: Map<String, Value>,
}

impl TextStyle {
    /// Flattens the style into a property object.
    ///
    /// Spacing expands to `margin`, `marginTop`, ..., `paddingVertical`;
    /// unset optional properties are omitted.
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        out.insert("fontSize".into(), Value::from(self.font_size));
        out.insert("color".into(), Value::from(self.color.clone()));
        if let Some(weight) = self.font_weight {
            out.insert("fontWeight".into(), Value::from(weight.to_string()));
        }
        if let Some(family) = &self.font_family {
            out.insert("fontFamily".into(), Value::from(family.clone()));
        }
        out.insert("textAlign".into(), Value::from(self.text_align.as_str()));
        for (prefix, spacing) in [("margin", &self.margin), ("padding", &self.padding)] {
            for (suffix, value) in spacing.entries() {
                out.insert(format!("{prefix}{suffix}"), Value::from(value));
            }
        }
        if let Some(lines) = self.number_of_lines {
            out.insert("numberOfLines".into(), Value::from(lines));
        }
        for (key, value) in &self.extra {
            out.insert(key.clone(), value.clone());
        }
        Value::Object(out)
    }

    fn apply(&mut self, patch: &StylePatch) {
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if patch.font_weight.is_some() {
            self.font_weight = patch.font_weight;
        }
        if patch.font_family.is_some() {
            self.font_family = patch.font_family.clone();
        }
        self.apply_extra(patch);
    }

    fn apply_extra(&mut self, patch: &StylePatch) {
        let current = StylePatch {
            extra: std::mem::take(&mut self.extra),
            ..StylePatch::default()
        };
        self.extra = current.merged(patch).extra;
    }
}

/// Builds the style for `props` from its resolved font attributes.
///
/// Layers, later winning:
///
/// 1. the resolved font attributes, alignment (left by default), margin,
///    padding and the line limit;
/// 2. the custom skin's `styles`: extra properties always, `fontWeight` and
///    `fontFamily` only where resolution left them unset. Its `color` and
///    `fontSize` were already considered during resolution and are not
///    applied again;
/// 3. `props.text_styles`, applied in full.
pub fn compose_text_style(
    props: &TextProps,
    resolved: &ResolvedTextConfig,
    text: &TextConfig,
) -> TextStyle {
    let mut style = TextStyle {
        font_size: resolved.font_size,
        color: resolved.color.clone(),
        font_weight: resolved.font_weight,
        font_family: resolved.font_family.clone(),
        text_align: props.align.unwrap_or_default(),
        margin: props.margin.unwrap_or_default(),
        padding: props.padding.unwrap_or_default(),
        number_of_lines: props.number_of_lines,
        extra: Map::new(),
    };

    let skin_styles = props
        .skin
        .as_deref()
        .and_then(|skin| text.skins.get(skin))
        .and_then(|definition| definition.styles.as_ref());
    if let Some(skin_styles) = skin_styles {
        if style.font_weight.is_none() {
            style.font_weight = skin_styles.font_weight;
        }
        if style.font_family.is_none() {
            style.font_family = skin_styles.font_family.clone();
        }
        style.apply_extra(skin_styles);
    }

    if let Some(text_styles) = &props.text_styles {
        style.apply(text_styles);
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigPatch, SkinDefinition};
    use serde_json::json;

    fn resolved() -> ResolvedTextConfig {
        ResolvedTextConfig {
            font_size: 16.0,
            color: "#111111".into(),
            font_weight: Some(FontWeight::BOLD),
            font_family: None,
        }
    }

    #[test]
    fn test_base_layer() {
        let props = TextProps::new()
            .align(TextAlign::Center)
            .margin(Spacing {
                top: Some(4.0),
                ..Spacing::default()
            })
            .padding(Spacing::symmetric(8.0, 2.0));
        let style = compose_text_style(&props, &resolved(), &TextConfig::default());

        assert_eq!(
            style.to_value(),
            json!({
                "fontSize": 16.0,
                "color": "#111111",
                "fontWeight": "700",
                "textAlign": "center",
                "marginTop": 4.0,
                "paddingHorizontal": 8.0,
                "paddingVertical": 2.0
            })
        );
    }

    #[test]
    fn test_uniform_spacing_keys() {
        let props = TextProps::new().margin(3.0).padding(5.0);
        let value = compose_text_style(&props, &resolved(), &TextConfig::default()).to_value();
        assert_eq!(value["margin"], json!(3.0));
        assert_eq!(value["padding"], json!(5.0));
        assert_eq!(value["textAlign"], json!("left"));
    }

    #[test]
    fn test_line_limit_passes_through() {
        let props = TextProps::new().number_of_lines(2);
        let style = compose_text_style(&props, &resolved(), &TextConfig::default());
        assert_eq!(style.number_of_lines, Some(2));
        assert_eq!(style.to_value()["numberOfLines"], json!(2));

        let unlimited = compose_text_style(&TextProps::new(), &resolved(), &TextConfig::default());
        assert!(unlimited.to_value().get("numberOfLines").is_none());
    }

    #[test]
    fn test_skin_styles_extend_without_replacing_color() {
        let config = Config::default().merged(&ConfigPatch::new().skin(
            "caption",
            SkinDefinition::based_on("small").styles(
                StylePatch::new()
                    .color("#999999")
                    .font_family("Inter-Light")
                    .property("opacity", 0.6),
            ),
        ));
        let props = TextProps::new().skin("caption");
        let style = compose_text_style(&props, &resolved(), &config.text);

        assert_eq!(style.color, "#111111");
        assert_eq!(style.font_family.as_deref(), Some("Inter-Light"));
        assert_eq!(style.extra["opacity"], json!(0.6));
    }

    #[test]
    fn test_text_styles_apply_last() {
        let config = Config::default().merged(&ConfigPatch::new().skin(
            "caption",
            SkinDefinition::based_on("small").styles(StylePatch::new().property("lineHeight", 18)),
        ));
        let props = TextProps::new().skin("caption").text_styles(
            StylePatch::new()
                .color("#ABCDEF")
                .font_size(12.0)
                .property("lineHeight", 20),
        );
        let style = compose_text_style(&props, &resolved(), &config.text);

        assert_eq!(style.color, "#ABCDEF");
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.extra["lineHeight"], json!(20));
    }
}
