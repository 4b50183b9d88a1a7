//! Founder Mode preference
//!
//! One boolean, persisted under `founder-mode`. Subscribers are told about
//! every change; the footer uses it to switch to spectrum colours.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;

use crate::core::error::{FooterError, FooterResult};

pub const STORAGE_KEY: &str = "founder-mode";

/// Key/value persistence for preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> FooterResult<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> FooterResult<()> {
        (**self).save(key, value)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> FooterResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn from_window() -> FooterResult<Self> {
        let window = web_sys::window().ok_or_else(|| FooterError::Browser("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| FooterError::Browser(format!("localStorage: {e:?}")))?
            .ok_or_else(|| FooterError::Browser("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> FooterResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| FooterError::Browser(format!("localStorage write: {e:?}")))
    }
}

type Listener = Box<dyn FnMut(bool)>;

pub struct FounderMode<P: PreferenceStore> {
    store: P,
    active: bool,
    listeners: Vec<Listener>,
}

impl<P: PreferenceStore> FounderMode<P> {
    /// Restore from `store`; only a stored `"true"` turns it on
    pub fn load(store: P) -> Self {
        let active = store.load(STORAGE_KEY).as_deref() == Some("true");
        debug!("founder mode loaded: {active}");
        Self { store, active, listeners: Vec::new() }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Register `listener`. It is called at once with the current state,
    /// then on every change.
    pub fn subscribe<F>(&mut self, mut listener: F)
    where
        F: FnMut(bool) + 'static,
    {
        listener(self.active);
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Flip, persist and notify. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_active(!self.active)
    }

    pub fn set_active(&mut self, active: bool) -> bool {
        if active == self.active {
            return active;
        }
        self.active = active;
        if let Err(err) = self.store.save(STORAGE_KEY, if active { "true" } else { "false" }) {
            // still applied for this page view
            warn!("{err}");
        }
        for listener in self.listeners.iter_mut() {
            listener(active);
        }
        active
    }
}

/// Value of the `data-mode` attribute on `<html>`
pub fn mode_attribute(active: bool) -> &'static str {
    if active {
        "founder"
    } else {
        "professional"
    }
}

fn apply_mode_attribute(active: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-mode", mode_attribute(active)) {
            warn!("could not set data-mode: {e:?}");
        }
    }
}

/// Founder Mode for the page, backed by localStorage when available
#[wasm_bindgen]
pub struct FounderModeState {
    pub(crate) inner: Rc<RefCell<FounderMode<Box<dyn PreferenceStore>>>>,
}

#[wasm_bindgen]
impl FounderModeState {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let store: Box<dyn PreferenceStore> = match LocalStorageStore::from_window() {
            Ok(store) => Box::new(store),
            Err(err) => {
                warn!("{err}; founder mode will not persist");
                Box::new(MemoryStore::new())
            }
        };
        let mut mode = FounderMode::load(store);
        mode.subscribe(apply_mode_attribute);
        Self { inner: Rc::new(RefCell::new(mode)) }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner.borrow().is_active()
    }

    pub fn toggle(&self) -> bool {
        self.inner.borrow_mut().toggle()
    }

    pub fn set_active(&self, active: bool) -> bool {
        self.inner.borrow_mut().set_active(active)
    }
}

impl Default for FounderModeState {
    fn default() -> Self {
        Self::new()
    }
}
