use std::collections::HashMap;

use crate::domain::data_stores::{KeyValueStore, StorageError};

#[derive(Default, Debug, Clone)]
pub struct HashmapKeyValueStore {
    items: HashMap<String, String>,
}

impl HashmapKeyValueStore {
    pub fn new() -> Self {
        HashmapKeyValueStore::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for HashmapKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    async fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let _ = self.items.remove(key);
        Ok(())
    }
}
