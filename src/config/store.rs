//! The mutable configuration holder with change notification.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::model::Config;
use super::patch::ConfigPatch;
use crate::merge::Merge;
use crate::scaling::TextScaleMode;
use crate::theme::ThemeMode;

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<BTreeMap<u64, Listener>>,
}

impl Listeners {
    fn insert(&self, listener: Listener) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().insert(id, listener);
        id
    }

    fn remove(&self, id: u64) {
        self.entries.borrow_mut().remove(&id);
    }

    fn ids(&self) -> Vec<u64> {
        self.entries.borrow().keys().copied().collect()
    }

    fn get(&self, id: u64) -> Option<Listener> {
        self.entries.borrow().get(&id).cloned()
    }
}

/// Holds the current [`Config`] and notifies subscribers when it changes.
///
/// The store is a cheap handle: clones share the same configuration and
/// listener set. It is meant to be owned by the application root and passed
/// to whatever resolves styles.
///
/// Every change goes through [`configure`](Self::configure), which merges a
/// patch into the current value and swaps in the result. Snapshots obtained
/// from [`config`](Self::config) are never modified afterwards.
///
/// Listeners run synchronously inside `configure`, in subscription order.
/// A listener unsubscribed by another listener during the same pass is not
/// called. Listeners subscribed during a pass are first called on the next
/// one. A listener that calls `configure` itself causes an immediate, nested
/// notification of every listener, including itself; nothing guards against
/// unbounded recursion.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use textskin::{ConfigPatch, ConfigStore, ThemeMode};
///
/// let store = ConfigStore::new();
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let subscription = store.subscribe(move || counter.set(counter.get() + 1));
///
/// store.configure(&ConfigPatch::new().theme(ThemeMode::Dark));
/// assert_eq!(calls.get(), 1);
/// assert_eq!(store.config().theme, ThemeMode::Dark);
///
/// subscription.unsubscribe();
/// store.set_theme(ThemeMode::Light);
/// assert_eq!(calls.get(), 1);
/// ```
#[derive(Clone)]
pub struct ConfigStore {
    current: Rc<RefCell<Rc<Config>>>,
    listeners: Rc<Listeners>,
}

impl ConfigStore {
    /// Creates a store holding the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a store starting from `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            current: Rc::new(RefCell::new(Rc::new(config))),
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Returns the current configuration snapshot.
    pub fn config(&self) -> Rc<Config> {
        Rc::clone(&self.current.borrow())
    }

    /// Merges `patch` into the current configuration and notifies listeners.
    ///
    /// Returns the configuration current after notification, which differs
    /// from the merge result only if a listener configured the store again.
    pub fn configure(&self, patch: &ConfigPatch) -> Rc<Config> {
        let next = Rc::new(self.config().merged(patch));
        *self.current.borrow_mut() = next;
        self.notify();
        self.config()
    }

    /// Registers a listener called after every [`configure`](Self::configure).
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.listeners.insert(Rc::new(listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }

    /// Pins the theme mode.
    pub fn set_theme(&self, theme: ThemeMode) -> Rc<Config> {
        self.configure(&ConfigPatch::new().theme(theme))
    }

    /// Sets the custom text scale multiplier, keeping the other text-scale settings.
    pub fn set_custom_text_scale(&self, multiplier: f32) -> Rc<Config> {
        self.configure(&ConfigPatch::new().custom_text_scale(multiplier))
    }

    /// Sets the UI scale multiplier, keeping the enabled flag.
    pub fn set_ui_scale(&self, multiplier: f32) -> Rc<Config> {
        self.configure(&ConfigPatch::new().ui_scale(multiplier))
    }

    /// Chooses how the device and custom text scales combine.
    pub fn set_text_scale_mode(&self, mode: TextScaleMode) -> Rc<Config> {
        self.configure(&ConfigPatch::new().text_scale_mode(mode))
    }

    fn notify(&self) {
        let ids = self.listeners.ids();
        tracing::debug!(listeners = ids.len(), "configuration updated");
        // Listeners removed by an earlier listener in this pass are skipped.
        for id in ids {
            if let Some(listener) = self.listeners.get(id) {
                listener();
            }
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle returned by [`ConfigStore::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`unsubscribe`](Self::unsubscribe) to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    /// Removes the listener. Calling this again is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(self.id);
        }
    }

    /// Whether the listener is still registered with a live store.
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.entries.borrow().contains_key(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(store: &ConfigStore) -> (Rc<Cell<u32>>, Subscription) {
        let calls = Rc::new(Cell::new(0));
        let inner = Rc::clone(&calls);
        let subscription = store.subscribe(move || inner.set(inner.get() + 1));
        (calls, subscription)
    }

    #[test]
    fn test_configure_notifies_each_listener_once() {
        let store = ConfigStore::new();
        let (first, _a) = counter(&store);
        let (second, _b) = counter(&store);

        store.configure(&ConfigPatch::new().ratio(1.2));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_listener_sees_new_value() {
        let store = ConfigStore::new();
        let seen = Rc::new(Cell::new(ThemeMode::Auto));
        let observer = store.clone();
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move || sink.set(observer.config().theme));

        store.set_theme(ThemeMode::Dark);
        assert_eq!(seen.get(), ThemeMode::Dark);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = ConfigStore::new();
        let (calls, subscription) = counter(&store);
        let (other, _keep) = counter(&store);

        subscription.unsubscribe();
        subscription.unsubscribe();
        assert!(!subscription.is_active());
        assert_eq!(store.listener_count(), 1);

        store.configure(&ConfigPatch::new());
        assert_eq!(calls.get(), 0);
        assert_eq!(other.get(), 1);
    }

    #[test]
    fn test_listener_unsubscribed_mid_notification_is_skipped() {
        let store = ConfigStore::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let target = Rc::clone(&slot);
        let _first = store.subscribe(move || {
            if let Some(subscription) = target.borrow().as_ref() {
                subscription.unsubscribe();
            }
        });
        let (calls, second) = counter(&store);
        *slot.borrow_mut() = Some(second);

        store.configure(&ConfigPatch::new());
        assert_eq!(calls.get(), 0);
        assert_eq!(store.listener_count(), 1);

        store.configure(&ConfigPatch::new());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_patch_still_notifies() {
        let store = ConfigStore::new();
        let (calls, _subscription) = counter(&store);
        let before = store.config();

        let after = store.configure(&ConfigPatch::new());
        assert_eq!(*before, *after);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_snapshots_are_stable() {
        let store = ConfigStore::new();
        let snapshot = store.config();
        store.set_ui_scale(1.3);
        assert_eq!(snapshot.scaling.ui_scale.multiplier, 1.0);
        assert_eq!(store.config().scaling.ui_scale.multiplier, 1.3);
        assert!(!Rc::ptr_eq(&snapshot, &store.config()));
    }

    #[test]
    fn test_setters_preserve_siblings() {
        let store = ConfigStore::new();
        store.configure(&ConfigPatch::new().ui_scale_enabled(false).respect_native(false));

        store.set_ui_scale(0.9);
        store.set_custom_text_scale(1.1);
        store.set_text_scale_mode(TextScaleMode::Native);

        let config = store.config();
        assert!(!config.scaling.ui_scale.enabled);
        assert_eq!(config.scaling.ui_scale.multiplier, 0.9);
        assert!(!config.scaling.text_scale.respect_native);
        assert_eq!(config.scaling.text_scale.custom_multiplier, 1.1);
        assert_eq!(config.scaling.text_scale.mode, TextScaleMode::Native);
        assert_eq!(config.theme, ThemeMode::Auto);
    }

    #[test]
    fn test_reentrant_configure_notifies_recursively() {
        let store = ConfigStore::new();
        let calls = Rc::new(Cell::new(0));
        let inner_calls = Rc::clone(&calls);
        let inner_store = store.clone();
        let _subscription = store.subscribe(move || {
            inner_calls.set(inner_calls.get() + 1);
            if inner_store.config().theme != ThemeMode::Dark {
                inner_store.set_theme(ThemeMode::Dark);
            }
        });

        let result = store.set_theme(ThemeMode::Light);
        assert_eq!(calls.get(), 2);
        assert_eq!(result.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = ConfigStore::new();
        let (_, subscription) = counter(&store);
        drop(store);
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }
}
