use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("User with email {0} not found.")]
    UserNotFound(String),

    #[error("Incorrect email or password.")]
    InvalidCredentials,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::UserNotFound(_) => StatusCode::UNAUTHORIZED,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        };

        (status, self.to_string()).into_response()
    }
}
