//! The light and dark color tables.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

use super::mode::ColorMode;

/// Returned for keys missing from a palette, loud enough to spot in a UI.
pub const MISSING_COLOR: &str = "#FF00FF";

/// Key of the default text color in both palettes.
pub const TEXT_PRIMARY: &str = "textPrimary";

const BRAND_COLOR: &str = "#173ff5";

const LIGHT_COLORS: &[(&str, &str)] = &[
    ("textShade0", "#FFFFFF"),
    ("textShade1", "#000000"),
    ("textShade2", "#374151"),
    ("textShade3", "#4B5563"),
    ("textShade4", "#6B7280"),
    ("textShade5", "#9CA3AF"),
    ("textPrimary", "#111827"),
    ("textSecondary", "#374151"),
    ("textTertiary", "#4B5563"),
    ("textMuted", "#6B7280"),
    ("textDisabled", "#9CA3AF"),
    ("textInverse", "#FFFFFF"),
    ("textHighlight", "#2563EB"),
    ("textDanger", "#B91C1C"),
    ("textSuccess", "#15803D"),
    ("textWarning", "#B45309"),
    ("bgPrimary", "#FFFFFF"),
    ("bgSecondary", "#F8FAFC"),
    ("bgTertiary", "#F1F5F9"),
    ("bgCard", "#F9FAFB"),
    ("bgElevated", "#EEF2FF"),
    ("bgAccent", "#F0F7FF"),
    ("surfacePrimary", "#FFFFFF"),
    ("surfaceSecondary", "#F6F9FC"),
    ("surfaceHover", "#EEF2FF"),
    ("surfaceMuted", "#FBFBFB"),
    ("border", "#E6E9EE"),
    ("borderMuted", "#EDEFF3"),
    ("borderStrong", "#D1D5DB"),
    ("borderFocus", "#3B82F6"),
    ("primary", BRAND_COLOR),
    ("primaryHover", "#1D4ED8"),
    ("primarySoft", "rgba(37,99,235,0.08)"),
    ("success", "#16A34A"),
    ("successSoft", "rgba(22,163,74,0.08)"),
    ("danger", "#DC2626"),
    ("dangerSoft", "rgba(220,38,38,0.08)"),
    ("warning", "#F59E0B"),
    ("warningSoft", "rgba(245,158,11,0.08)"),
    ("info", "#0EA5E9"),
    ("infoSoft", "rgba(14,165,233,0.08)"),
    ("overlay", "rgba(0,0,0,0.32)"),
    ("overlayStrong", "rgba(0,0,0,0.56)"),
    ("disabled", "#C7CDD3"),
    ("disabledBg", "#F4F6F8"),
    ("accent1", "#F97316"),
    ("accent2", "#8B5CF6"),
    ("accent3", "#06B6D4"),
];

const DARK_COLORS: &[(&str, &str)] = &[
    ("textPrimary", "#F8FAFC"),
    ("textHeading", "#F1F5F9"),
    ("textSecondary", "#E6EEF8"),
    ("textTertiary", "#C7D2DA"),
    ("textMuted", "#9CA3AF"),
    ("textDisabled", "#6B7280"),
    ("textPlaceholder", "#6B7280"),
    ("textInverse", "#0B0F18"),
    ("textHighlight", "#60A5FA"),
    ("textLink", "#60A5FA"),
    ("textDanger", "#F87171"),
    ("textSuccess", "#22C55E"),
    ("textWarning", "#F59E0B"),
    ("bgPrimary", "#0B0F18"),
    ("bgSecondary", "#0F1724"),
    ("bgTertiary", "#111827"),
    ("bgCard", "#101826"),
    ("bgElevated", "#152033"),
    ("bgAccent", "#0D1B2B"),
    ("surfacePrimary", "#0F1724"),
    ("surfaceSecondary", "#141B2A"),
    ("surfaceHover", "#192231"),
    ("surfaceMuted", "#0C1116"),
    ("border", "#1F2937"),
    ("borderMuted", "#273142"),
    ("borderStrong", "#374151"),
    ("borderFocus", "#6366F1"),
    ("primary", "#4F46E5"),
    ("primaryHover", "#4338CA"),
    ("primarySoft", "rgba(79,70,229,0.12)"),
    ("success", "#22C55E"),
    ("successSoft", "rgba(34,197,94,0.12)"),
    ("danger", "#F87171"),
    ("dangerSoft", "rgba(248,113,113,0.12)"),
    ("warning", "#EAB308"),
    ("warningSoft", "rgba(234,179,8,0.12)"),
    ("info", "#38BDF8"),
    ("infoSoft", "rgba(56,189,248,0.12)"),
    ("overlay", "rgba(0,0,0,0.5)"),
    ("overlayStrong", "rgba(0,0,0,0.8)"),
    ("disabled", "#475569"),
    ("disabledBg", "#0B141E"),
    ("accent1", "#FB923C"),
    ("accent2", "#A78BFA"),
    ("accent3", "#06B6D4"),
];

static LIGHT: Lazy<Palette> = Lazy::new(|| Palette::new(ColorMode::Light, LIGHT_COLORS));
static DARK: Lazy<Palette> = Lazy::new(|| Palette::new(ColorMode::Dark, DARK_COLORS));

/// A fixed table of named colors for one mode.
#[derive(Debug)]
pub struct Palette {
    mode: ColorMode,
    entries: &'static [(&'static str, &'static str)],
    index: HashMap<&'static str, &'static str>,
}

impl Palette {
    fn new(mode: ColorMode, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            mode,
            entries,
            index: entries.iter().copied().collect(),
        }
    }

    /// The palette for `mode`.
    pub fn for_mode(mode: ColorMode) -> &'static Palette {
        match mode {
            ColorMode::Light => &*LIGHT,
            ColorMode::Dark => &*DARK,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The color stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn text_primary(&self) -> &'static str {
        self.get(TEXT_PRIMARY).unwrap_or(MISSING_COLOR)
    }

    /// Like [`get_color`] but bound to this palette.
    pub fn color(&self, key: &str) -> &'static str {
        if key.is_empty() {
            return self.text_primary();
        }
        match self.get(key) {
            Some(color) => color,
            None => {
                tracing::warn!(key, theme = %self.mode, "missing color key");
                MISSING_COLOR
            }
        }
    }
}

/// Looks up a color for a mode.
///
/// An empty key yields the palette's primary text color. An unknown key logs
/// a warning and yields [`MISSING_COLOR`].
///
/// # Example
///
/// ```rust
/// use textskin::{get_color, ColorMode, MISSING_COLOR};
///
/// assert_eq!(get_color("textPrimary", ColorMode::Light), "#111827");
/// assert_eq!(get_color("", ColorMode::Dark), "#F8FAFC");
/// assert_eq!(get_color("textTypo", ColorMode::Light), MISSING_COLOR);
/// ```
pub fn get_color(key: &str, mode: ColorMode) -> &'static str {
    Palette::for_mode(mode).color(key)
}

/// Every key present in either palette, sorted.
pub fn color_keys() -> Vec<&'static str> {
    let keys: BTreeSet<&'static str> = LIGHT.keys().chain(DARK.keys()).collect();
    keys.into_iter().collect()
}
