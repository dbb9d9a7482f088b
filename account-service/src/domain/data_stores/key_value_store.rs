use super::StorageError;

// Browser-style storage: string keys, opaque string values, whole-value writes.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    async fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
