//! Resolution of font size, color, weight and family for one text instance.

use serde::Serialize;

use super::props::TextProps;
use crate::config::{SkinDefinition, StylePatch, TextConfig, DEFAULT_SKIN};
use crate::scaling::Scaling;
use crate::skin::{parse_skin, FontWeight};
use crate::theme::Theme;
use crate::typography::font_size;

/// The resolved font attributes of a text instance.
///
/// `font_weight` and `font_family` are `None` when the host default applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTextConfig {
    pub font_size: f32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Resolves the font attributes of `props` against the text configuration.
///
/// `base_font_size` is the pixel size of `medium` for the current device
/// (see [`base_font_size`](crate::base_font_size)). Each attribute walks a
/// fixed chain and stops at the first value present:
///
/// | Attribute | Chain |
/// |-----------|-------|
/// | skin name | custom skin's `baseSkin` → `props.skin` → `defaultSkin` → `"medium"` |
/// | base size | `props.size` → override `fontSize` → custom skin `fontSize` → size of the parsed skin |
/// | ratio | `props.ratio` → configured `ratio` |
/// | scale | 1.0 with `disable_scaling`, else the effective text scale |
/// | color | `props.color` → override `color` → custom skin `styles.color` → custom skin `color` → configured `color` → theme `textPrimary` |
/// | weight | override `fontWeight` → weight of the parsed skin |
/// | family | override `fontFamily` |
///
/// Overrides and custom skins are looked up by `props.skin` as given. The
/// final size is `base size × ratio × scale`. Nothing here fails: a skin name
/// that does not parse falls back to `medium` with a warning.
pub fn resolve_text_config(
    props: &TextProps,
    text: &TextConfig,
    theme: &Theme,
    scaling: &Scaling,
    base_font_size: f32,
) -> ResolvedTextConfig {
    let requested = non_empty(&props.skin);
    let custom: Option<&SkinDefinition> = requested.and_then(|skin| text.skins.get(skin));
    let overrides: Option<&StylePatch> = requested.and_then(|skin| text.overrides.get(skin));

    let skin_name = custom
        .and_then(|definition| non_empty(&definition.base_skin))
        .or(requested)
        .or_else(|| Some(text.default_skin.as_str()).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_SKIN);
    let parsed = parse_skin(skin_name);

    let base_size = props
        .size
        .or_else(|| overrides.and_then(|o| o.font_size))
        .or_else(|| custom.and_then(|c| c.font_size))
        .unwrap_or_else(|| font_size(parsed.size, base_font_size));

    let ratio = props.ratio.unwrap_or(text.ratio);
    let scale = if props.disable_scaling {
        1.0
    } else {
        scaling.effective_text_scale()
    };

    let color = non_empty(&props.color)
        .or_else(|| overrides.and_then(|o| non_empty(&o.color)))
        .or_else(|| custom.and_then(|c| c.styles.as_ref()).and_then(|s| non_empty(&s.color)))
        .or_else(|| custom.and_then(|c| non_empty(&c.color)))
        .or_else(|| non_empty(&text.color))
        .unwrap_or_else(|| theme.text_primary());

    let font_weight = overrides
        .and_then(|o| o.font_weight)
        .or(parsed.font_weight);
    let font_family = overrides.and_then(|o| o.font_family.clone());

    ResolvedTextConfig {
        font_size: base_size * ratio * scale,
        color: color.to_string(),
        font_weight,
        font_family,
    }
}
