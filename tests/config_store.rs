//! Store behavior as seen from outside the crate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use textskin::{deep_merge, ConfigPatch, ConfigStore, TextScaleMode, ThemeMode};

#[test]
fn test_every_listener_runs_once_before_configure_returns() {
    let store = ConfigStore::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let subscriptions: Vec<_> = (0..3)
        .map(|i| {
            let log = Rc::clone(&log);
            store.subscribe(move || log.borrow_mut().push(i))
        })
        .collect();

    store.configure(&ConfigPatch::new().theme(ThemeMode::Dark));
    let mut seen = log.borrow().clone();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2]);

    for subscription in &subscriptions {
        subscription.unsubscribe();
    }
    store.configure(&ConfigPatch::new().theme(ThemeMode::Light));
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_unsubscribe_twice_is_harmless() {
    let store = ConfigStore::new();
    let calls = Rc::new(Cell::new(0));
    let sink = Rc::clone(&calls);
    let subscription = store.subscribe(move || sink.set(sink.get() + 1));

    subscription.unsubscribe();
    subscription.unsubscribe();
    store.set_ui_scale(1.4);
    assert_eq!(calls.get(), 0);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn test_clones_share_state() {
    let store = ConfigStore::new();
    let other = store.clone();
    other.set_text_scale_mode(TextScaleMode::Custom);
    assert_eq!(store.config().scaling.text_scale.mode, TextScaleMode::Custom);
}

#[test]
fn test_typed_merge_matches_untyped_merge() {
    let store = ConfigStore::new();
    let before = serde_json::to_value(&*store.config()).unwrap();

    let patch_json = serde_json::json!({
        "scaling": { "uiScale": { "multiplier": 1.25 } },
        "text": { "overrides": { "small": { "fontFamily": "Mono" } } }
    });
    let patch: ConfigPatch = serde_json::from_value(patch_json.clone()).unwrap();
    let after = serde_json::to_value(&*store.configure(&patch)).unwrap();

    assert_eq!(after, deep_merge(&before, &patch_json));
}

#[test]
fn test_patch_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ui.json");
    std::fs::write(&path, r#"{ "theme": "dark", "text": { "defaultSkin": "small" } }"#).unwrap();

    let store = ConfigStore::new();
    let config = store.configure(&ConfigPatch::from_path(&path).unwrap());
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.text.default_skin, "small");
}
