pub mod credential_store;
pub mod credential_store_err;
pub mod key_value_store;
pub mod reset_session_err;
pub mod reset_session_store;
pub mod storage_err;

pub use credential_store::CredentialStore;
pub use credential_store_err::CredentialStoreError;
pub use key_value_store::KeyValueStore;
pub use reset_session_err::ResetSessionStoreError;
pub use reset_session_store::ResetSessionStore;
pub use storage_err::StorageError;
