use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{env as vars, *};

#[derive(Clone, Debug)]
pub struct Config {
    address: String,
    storage_path: PathBuf,
    assets_dir: PathBuf,
    reset_redirect_delay: Duration,
    reset_session_ttl: Duration,
}

impl Config {
    pub fn new(
        address: impl Into<String>,
        storage_path: impl Into<PathBuf>,
        assets_dir: impl Into<PathBuf>,
        reset_redirect_delay: Duration,
        reset_session_ttl: Duration,
    ) -> Self {
        Self {
            address: address.into(),
            storage_path: storage_path.into(),
            assets_dir: assets_dir.into(),
            reset_redirect_delay,
            reset_session_ttl,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
    pub fn reset_redirect_delay(&self) -> Duration {
        self.reset_redirect_delay
    }
    /// How long an untouched reset session is kept before it is swept.
    pub fn reset_session_ttl(&self) -> Duration {
        self.reset_session_ttl
    }

    /// Reads the configuration from the environment, loading `.env` first when
    /// present. Every variable is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv();

        let address = opt_var(vars::APP_ADDRESS_ENV_VAR).unwrap_or_else(|| DEFAULT_APP_ADDRESS.into());
        let storage_path =
            opt_var(vars::STORAGE_PATH_ENV_VAR).unwrap_or_else(|| DEFAULT_STORAGE_PATH.into());
        let assets_dir = opt_var(vars::ASSETS_DIR_ENV_VAR).unwrap_or_else(|| DEFAULT_ASSETS_DIR.into());
        let reset_redirect_delay = match opt_var(vars::RESET_REDIRECT_DELAY_MS_ENV_VAR) {
            Some(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::Invalid(vars::RESET_REDIRECT_DELAY_MS_ENV_VAR))?,
            ),
            None => DEFAULT_RESET_REDIRECT_DELAY,
        };
        let reset_session_ttl = match opt_var(vars::RESET_SESSION_TTL_SECS_ENV_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Invalid(vars::RESET_SESSION_TTL_SECS_ENV_VAR)),
            },
            None => DEFAULT_RESET_SESSION_TTL,
        };

        if address.is_empty() {
            return Err(ConfigError::Invalid(vars::APP_ADDRESS_ENV_VAR));
        }
        if storage_path.is_empty() {
            return Err(ConfigError::Invalid(vars::STORAGE_PATH_ENV_VAR));
        }

        Ok(Self::new(
            address,
            storage_path,
            assets_dir,
            reset_redirect_delay,
            reset_session_ttl,
        ))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
