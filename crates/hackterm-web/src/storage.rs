//! IndexedDB persistence through the `HackStorage` JS bridge.
//!
//! Values cross the boundary as JSON text; `js/hack-storage.js` keeps
//! them in the `kv` store of the `HacknetProtoDB` database.

use async_trait::async_trait;
use hackterm_core::{KeyValueStore, StoreError};
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// HackStorage JavaScript object for IndexedDB persistence
    #[wasm_bindgen(js_namespace = HackStorage, js_name = init, catch)]
    async fn storage_init() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = HackStorage, js_name = put, catch)]
    async fn storage_put(key: &str, value: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = HackStorage, js_name = get, catch)]
    async fn storage_get(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = HackStorage, js_name = delete, catch)]
    async fn storage_delete(key: &str) -> Result<JsValue, JsValue>;
}

fn backend(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// [`KeyValueStore`] backed by IndexedDB.
#[derive(Debug, Default)]
pub struct IndexedDbStore;

impl IndexedDbStore {
    pub fn new() -> Self {
        Self
    }

    /// Open the database, creating the object store on first run.
    pub async fn open(&self) -> Result<(), StoreError> {
        storage_init().await.map_err(backend)?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl KeyValueStore for IndexedDbStore {
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(&value)?;
        storage_put(key, &text).await.map_err(backend)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let raw = storage_get(key).await.map_err(backend)?;
        match raw.as_string() {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        storage_delete(key).await.map_err(backend)?;
        Ok(())
    }
}
