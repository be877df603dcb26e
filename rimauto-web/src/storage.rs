//! Browser storage shim.
//!
//! Wraps `window.localStorage` behind JSON get/set/remove so stores persist
//! typed values. Every failure path (storage disabled, quota, corrupt JSON)
//! is absorbed into `Option`/`bool` results; the app treats missing state as
//! "not set" and never panics here.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Store a JSON-serialized value. Returns `false` when storage is
/// unavailable or the write fails.
pub fn set_item<T: Serialize>(key: &str, value: &T) -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    match serde_json::to_string(value) {
        Ok(serialized) => storage.set_item(key, &serialized).is_ok(),
        Err(err) => {
            log::error!("storage: failed to serialize {key}: {err}");
            false
        }
    }
}

/// Read a JSON-serialized value. Corrupt entries decode as `None`.
pub fn get_item<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Store a plain string (tokens, init data) without JSON wrapping.
pub fn set_raw(key: &str, value: &str) -> bool {
    local_storage().map_or(false, |s| s.set_item(key, value).is_ok())
}

/// Read a plain string. Tolerates values written by [`set_item`] as quoted
/// JSON strings, so a token survives either write path.
pub fn get_raw(key: &str) -> Option<String> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    if raw.starts_with('"') {
        if let Ok(unquoted) = serde_json::from_str::<String>(&raw) {
            return Some(unquoted);
        }
    }
    Some(raw)
}

pub fn remove_item(key: &str) -> bool {
    local_storage().map_or(false, |s| s.remove_item(key).is_ok())
}

/// True when the key exists, regardless of its value.
pub fn has_item(key: &str) -> bool {
    local_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .is_some()
}
