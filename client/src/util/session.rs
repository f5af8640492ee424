//! `localStorage`-backed session store.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only. Native builds read as empty and ignore writes so
//! the page logic stays testable off-browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gateway::{SessionError, SessionStore};

/// The window's `localStorage`; survives reloads, shared by all tabs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window().ok_or_else(|| SessionError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| SessionError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_owned()))
}

impl SessionStore for LocalStorageSession {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(key)
                .map_err(|e| SessionError::Io(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|e| SessionError::Io(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .remove_item(key)
                .map_err(|e| SessionError::Io(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
