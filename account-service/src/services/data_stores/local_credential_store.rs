use std::sync::Arc;

use tokio::sync::RwLock;

use super::HashmapKeyValueStore;
use crate::app_state::KeyValueStoreType;
use crate::domain::data_stores::{CredentialStore, CredentialStoreError};
use crate::domain::UserRecord;
use crate::utils::USERS_KEY;

/// Credential store kept as a JSON array under the `users` key of a
/// key-value storage, the layout the site's signup page writes.
pub struct LocalCredentialStore {
    storage: KeyValueStoreType,
}

impl LocalCredentialStore {
    pub fn new(storage: KeyValueStoreType) -> Self {
        LocalCredentialStore { storage }
    }

    pub fn in_memory() -> Self {
        LocalCredentialStore::new(Arc::new(RwLock::new(HashmapKeyValueStore::new())))
    }
}

#[async_trait::async_trait]
impl CredentialStore for LocalCredentialStore {
    async fn try_load_all(&self) -> Result<Vec<UserRecord>, CredentialStoreError> {
        let raw = self
            .storage
            .read()
            .await
            .get_item(USERS_KEY)
            .await?;

        match raw {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| CredentialStoreError::Unreadable(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&mut self, users: &[UserRecord]) -> Result<(), CredentialStoreError> {
        let raw = serde_json::to_string(users)?;
        self.storage.write().await.set_item(USERS_KEY, raw).await?;
        Ok(())
    }
}
