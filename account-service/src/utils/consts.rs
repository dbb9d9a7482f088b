use std::time::Duration;

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const STORAGE_PATH_ENV_VAR: &str = "STORAGE_PATH";
    pub const ASSETS_DIR_ENV_VAR: &str = "ASSETS_DIR";
    pub const RESET_REDIRECT_DELAY_MS_ENV_VAR: &str = "RESET_REDIRECT_DELAY_MS";
    pub const RESET_SESSION_TTL_SECS_ENV_VAR: &str = "RESET_SESSION_TTL_SECS";
}

pub const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_STORAGE_PATH: &str = "data/storage.json";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_RESET_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_RESET_SESSION_TTL: Duration = Duration::from_secs(900);

// Storage keys shared with the site's pages.
pub const USERS_KEY: &str = "users";
pub const SELECTED_LANGUAGE_KEY: &str = "selectedLanguage";

pub const SIGN_IN_PATH: &str = "/signin";
