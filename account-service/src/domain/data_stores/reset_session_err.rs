#[derive(Debug, PartialEq)]
pub enum ResetSessionStoreError {
    SessionNotFound,
    SessionAlreadyExists,
}
