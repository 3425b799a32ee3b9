//! Key-value persistence collaborator.

use core::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// Key of the saved filesystem snapshot.
pub const FS_KEY: &str = "fs";
/// Key of the saved memory state.
pub const MEMORY_KEY: &str = "memory";

/// Async key-value store of JSON values.
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
