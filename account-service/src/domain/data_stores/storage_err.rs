use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a valid key-value map: {0}")]
    Corrupt(#[from] serde_json::Error),
}
