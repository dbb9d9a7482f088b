use thiserror::Error;

use super::StorageError;

#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("a user with email {0} already exists")]
    UserAlreadyExists(String),

    #[error("stored users could not be read: {0}")]
    Unreadable(String),

    #[error("could not serialize users: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
