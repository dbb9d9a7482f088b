use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{CredentialStore, KeyValueStore, ResetSessionStore};
use crate::services::PreferenceService;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type KeyValueStoreType = Arc<RwLock<dyn KeyValueStore>>;
pub type UserStoreType = Arc<RwLock<dyn CredentialStore>>;
pub type ResetSessionStoreType = Arc<RwLock<dyn ResetSessionStore>>;
pub type PreferenceServiceType = Arc<PreferenceService>;
pub type ConfigType = Arc<RwLock<Config>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub reset_sessions: ResetSessionStoreType,
    pub preferences: PreferenceServiceType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        reset_sessions: ResetSessionStoreType,
        preferences: PreferenceServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            reset_sessions,
            preferences,
            config,
        }
    }
}
