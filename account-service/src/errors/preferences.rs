use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("{0}")]
    InvalidLanguage(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for PreferenceError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            PreferenceError::InvalidLanguage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PreferenceError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
