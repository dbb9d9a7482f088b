use std::sync::Arc;

use account_service::app_state::{AppState, KeyValueStoreType};
use account_service::services::{
    FileKeyValueStore, HashmapResetSessionStore, LocalCredentialStore, PreferenceService,
};
use account_service::utils::Config;
use account_service::Application;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::from_env().expect("Failed to load config");

    // users and preferences share one storage, as the pages share localStorage
    let storage = FileKeyValueStore::open(config.storage_path())
        .await
        .expect("Failed to open storage");
    log::info!("using storage at {}", storage.path().display());
    let storage: KeyValueStoreType = Arc::new(RwLock::new(storage));

    let address = config.address().to_owned();
    let app_state = AppState::new(
        Arc::new(RwLock::new(LocalCredentialStore::new(storage.clone()))),
        Arc::new(RwLock::new(HashmapResetSessionStore::default())),
        Arc::new(PreferenceService::new(storage)),
        Arc::new(RwLock::new(config)),
    );

    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
