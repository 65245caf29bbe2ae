//! Persisted bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only piece of session state that outlives a page load.
//! Everything that reads or writes it goes through `TokenStore`, so flows can
//! be exercised in tests against `MemoryTokenStore`. Outside the browser
//! (SSR) `BrowserTokenStore` is inert.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

#[cfg(test)]
use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Single-slot storage for the session token.
pub trait TokenStore {
    /// Read the persisted token. Empty values count as absent.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous one.
    fn save(&self, token: &str);
    /// Delete the persisted token.
    fn clear(&self);
}

/// Browser `localStorage` store. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten()?;
            if raw.is_empty() { None } else { Some(raw) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-process store for exercising flows without a browser.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
