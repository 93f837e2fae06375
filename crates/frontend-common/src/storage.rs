//! localStorage-backed session persistence.

use newsroom_http::SessionBackend;
use web_sys::Storage;

/// `window.localStorage` adapter. Every operation degrades to a no-op when
/// storage is unavailable (privacy mode, non-browser contexts).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

impl BrowserBackend {
    pub fn new() -> Self {
        Self
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl SessionBackend for BrowserBackend {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
