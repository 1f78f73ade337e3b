//! `localStorage`-backed preference store.

use web_sys::Storage;

use crate::dom::{js_error_message, window};
use crate::error::SiteError;
use crate::state::theme::{MemoryStore, PreferenceStore};

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the origin's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when storage is disabled (private mode,
    /// sandboxed frames, blocked cookies).
    pub fn open() -> Result<Self, SiteError> {
        match window()?.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(SiteError::Storage("localStorage unavailable".into())),
            Err(err) => Err(SiteError::Storage(js_error_message(&err))),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage
            .get_item(key)
            .map_err(|e| SiteError::Storage(js_error_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(js_error_message(&e)))
    }
}

/// `localStorage` when available, otherwise a page-lifetime memory store.
pub fn open_store() -> Box<dyn PreferenceStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!(target: "site::theme", "{err}; preference will not persist");
            Box::new(MemoryStore::default())
        }
    }
}
