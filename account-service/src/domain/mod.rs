pub mod account_request;
pub mod data_stores;
pub mod email;
pub mod language;
pub mod navigator;
pub mod password;
pub mod preference;
pub mod reset_error;
pub mod reset_request;
pub mod reset_response;
pub mod reset_session;
pub mod reset_session_id;
mod user;

pub use account_request::*;
pub use data_stores::*;
pub use email::*;
pub use language::*;
pub use navigator::*;
pub use password::*;
pub use preference::*;
pub use reset_error::*;
pub use reset_request::*;
pub use reset_response::*;
pub use reset_session::*;
pub use reset_session_id::*;
pub use user::*;
