//! Session context over the browser's key-value storage.
//!
//! The login flow writes the three slots; this crate only reads and clears
//! them, so the backend trait models exactly that. Every accessor re-reads
//! storage — there is no in-process cache, external writes are observed on
//! the next call.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::session::{AuthCheck, Permissions, User, decode_or_default};

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";
pub const PERMISSIONS_KEY: &str = "permissions";

/// Read/teardown access to a string key-value store.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage` backing. A missing window or storage degrades to
/// absent values rather than failing.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backing for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn insert(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

/// Session context over the three fixed storage slots.
#[derive(Debug, Default)]
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

#[cfg(target_arch = "wasm32")]
impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The stored session token. An empty slot counts as absent, so an
    /// empty string neither authenticates nor yields an empty bearer
    /// header.
    pub fn token(&self) -> Option<String> {
        self.backend.read(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> User {
        decode_or_default(self.backend.read(USER_KEY).as_deref())
    }

    pub fn permissions(&self) -> Permissions {
        decode_or_default(self.backend.read(PERMISSIONS_KEY).as_deref())
    }

    /// Load-or-default init: authenticated iff a token is present. The
    /// user record is decoded with the silent-default policy either way.
    pub fn check(&self) -> AuthCheck {
        if self.token().is_some() {
            AuthCheck::Authenticated(self.user())
        } else {
            AuthCheck::Unauthenticated
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_admin()
    }

    pub fn has_permission(&self, tab: &str) -> bool {
        self.permissions().allows_tab(tab)
    }

    /// Teardown: clears all three slots regardless of prior state.
    pub fn clear(&self) {
        self.backend.remove(AUTH_TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.remove(PERMISSIONS_KEY);
    }
}
