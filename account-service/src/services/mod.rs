pub mod auth;
pub mod data_stores;
pub mod preference_service;
pub mod reset_session_sweeper;
pub mod sign_in_navigator;

pub use auth::*;
pub use data_stores::*;
pub use preference_service::*;
pub use reset_session_sweeper::*;
pub use sign_in_navigator::*;
