//! `localStorage` adapter behind the `KeyValueStore` seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! All persisted reader data (bookmarks, reading activity, theme) flows
//! through this one type so pages never touch web-sys storage glue directly.
//! Private browsing, disabled storage, and quota errors surface as
//! `StorageError` values for the caller to log and recover from.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use articles::{KeyValueStore, StorageError};

/// Handle to `window.localStorage`. Stateless; the storage object is looked
/// up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Read(js_error_text(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StorageError::Write(js_error_text(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
