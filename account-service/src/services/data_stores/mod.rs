pub mod file_key_value_store;
pub mod hashmap_key_value_store;
pub mod hashmap_reset_session_store;
pub mod local_credential_store;

pub use file_key_value_store::*;
pub use hashmap_key_value_store::*;
pub use hashmap_reset_session_store::*;
pub use local_credential_store::*;
