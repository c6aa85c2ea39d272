//! Persistence of the logged-in session between page loads.
//!
//! The whole login response is stored as one JSON blob under [`SESSION_KEY`].
//! A missing blob means "logged out".

use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};

use crate::data::LoginResponse;
use crate::errors::StorageError;
use crate::log::debug;

pub const SESSION_KEY: &str = "data";

pub trait SessionStore {
    /// `Ok(None)` when nothing is persisted.
    fn load(&self) -> Result<Option<LoginResponse>, StorageError>;

    fn save(&self, session: &LoginResponse) -> Result<(), StorageError>;

    /// Removing an absent blob is not an error.
    fn clear(&self);
}

/// Browser `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl From<gloo_storage::errors::StorageError> for StorageError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        match err {
            gloo_storage::errors::StorageError::SerdeError(err) => StorageError::Corrupt(err),
            other => StorageError::Unavailable(other.to_string()),
        }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<LoginResponse>, StorageError> {
        match LocalStorage::get::<LoginResponse>(SESSION_KEY) {
            Ok(session) => Ok(Some(session)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, session: &LoginResponse) -> Result<(), StorageError> {
        LocalStorage::set(SESSION_KEY, session).map_err(StorageError::from)
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_KEY);
    }
}

/// Keeps the serialized blob in memory; useful off the browser.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    blob: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, which need not be valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.blob.borrow().is_none()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<LoginResponse>, StorageError> {
        match self.blob.borrow().as_deref() {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    fn save(&self, session: &LoginResponse) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)?;
        *self.blob.borrow_mut() = Some(raw);
        Ok(())
    }

    fn clear(&self) {
        if self.blob.borrow_mut().take().is_none() {
            debug!("Session store was already empty");
        }
    }
}
