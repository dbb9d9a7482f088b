use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::MIN_PASSWORD_LENGTH;

/// Why a step of the password reset flow was refused. All of these are shown to
/// the user next to the form; none of them end the session.
#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResetError {
    #[error("No account found with this email address.")]
    AccountNotFound,

    #[error("Password must be at least {} characters long.", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("An error occurred. Please try again.")]
    UpdateFailed,

    #[error("This step is not available right now.")]
    WrongStage,
}
