//! Lookup of skin names, built-in and user-registered.
//!
//! Built-in skins are every bare size plus every size/weight combination,
//! reachable under a camelCase key (`largeBold` -> `"large-bold"`). Custom
//! skins are whatever the configuration registers under `text.skins` and are
//! reachable under their own name.

use std::rc::Rc;

use once_cell::sync::Lazy;

use super::parse::SkinSize;
use super::weight::SkinWeight;
use crate::config::Config;

/// `(camelCase key, skin name)` for all built-in skins.
///
/// Bare sizes come first, then each size's weight variants.
static BUILTIN_SKINS: Lazy<Vec<(String, String)>> = Lazy::new(|| {
    let bare = SkinSize::ALL.iter().map(|size| size.as_str().to_string());
    let variants = SkinSize::ALL.iter().flat_map(|size| {
        SkinWeight::ALL
            .iter()
            .map(move |weight| format!("{size}-{weight}"))
    });
    bare.chain(variants)
        .map(|name| (camel_case(&name), name))
        .collect()
});

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('-').enumerate() {
        let mut chars = part.chars();
        match chars.next() {
            Some(first) if i > 0 => {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
            _ => out.push_str(part),
        }
    }
    out
}

/// Names of all built-in skins, in registry order.
pub fn builtin_skin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_SKINS.iter().map(|(_, name)| name.as_str())
}

/// Skin lookup over a configuration snapshot.
///
/// # Example
///
/// ```rust
/// use textskin::{ConfigPatch, ConfigStore, SkinDefinition, SkinRegistry};
///
/// let store = ConfigStore::new();
/// store.configure(&ConfigPatch::new().skin("heading", SkinDefinition::based_on("extra-large-bold")));
///
/// let skins = SkinRegistry::new(store.config());
/// assert_eq!(skins.get("largeBold").as_deref(), Some("large-bold"));
/// assert_eq!(skins.get("heading").as_deref(), Some("heading"));
/// assert!(skins.get("missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SkinRegistry {
    config: Rc<Config>,
}

impl SkinRegistry {
    /// Creates a registry over the given snapshot.
    pub fn new(config: Rc<Config>) -> Self {
        Self { config }
    }

    /// Resolves a key to a skin name.
    ///
    /// Built-in camelCase keys win over custom skins of the same name.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some((_, name)) = BUILTIN_SKINS.iter().find(|(camel, _)| camel == key) {
            return Some(name.clone());
        }
        self.config
            .text
            .skins
            .contains_key(key)
            .then(|| key.to_string())
    }

    /// Whether `key` resolves to a skin.
    pub fn contains(&self, key: &str) -> bool {
        BUILTIN_SKINS.iter().any(|(camel, _)| camel == key)
            || self.config.text.skins.contains_key(key)
    }

    /// All keys: built-in camelCase keys first, then custom skin names.
    pub fn keys(&self) -> Vec<String> {
        BUILTIN_SKINS
            .iter()
            .map(|(camel, _)| camel.clone())
            .chain(self.config.text.skins.keys().cloned())
            .collect()
    }

    /// Whether `name` is a built-in skin name or a registered custom skin.
    pub fn is_known_name(&self, name: &str) -> bool {
        builtin_skin_names().any(|builtin| builtin == name)
            || self.config.text.skins.contains_key(name)
    }
}
