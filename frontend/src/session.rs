use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// Session storage key holding the last successful payment.
pub const PAYMENT_KEY: &str = "payment";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("session storage call failed: {0}")]
    Js(String),
    #[error("invalid session payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for SessionError {
    fn from(value: JsValue) -> Self {
        SessionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Hand-off from the checkout success callback to the course page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
    pub plan_id: String,
    pub plan_name: String,
    pub amount: u32,
}

pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;
}

pub struct BrowserSessionStore {
    storage: Storage,
}

impl BrowserSessionStore {
    pub fn new() -> Result<Self, SessionError> {
        let storage = window()
            .ok_or(SessionError::Unavailable)?
            .session_storage()?
            .ok_or(SessionError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        Ok(self.storage.set_item(key, value)?)
    }
}

pub fn save_payment(store: &dyn SessionStore, record: &PaymentRecord) -> Result<(), SessionError> {
    let payload = serde_json::to_string(record)?;
    store.set_item(PAYMENT_KEY, &payload)
}

/// Reads the stored payment. A missing or unreadable payload is `None`,
/// callers show fallback text.
pub fn load_payment(store: &dyn SessionStore) -> Option<PaymentRecord> {
    let payload = match store.get_item(PAYMENT_KEY) {
        Ok(payload) => payload?,
        Err(e) => {
            warn!("Could not read payment from session storage: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Ignoring malformed payment payload: {}", e);
            None
        }
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{SessionError, SessionStore};

    #[derive(Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl SessionStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
            Ok(self.raw(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
