use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::ResetSessionStoreError;

#[derive(Error, Debug)]
pub enum ResetRouteError {
    #[error("Reset session not found.")]
    SessionNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<ResetSessionStoreError> for ResetRouteError {
    fn from(e: ResetSessionStoreError) -> Self {
        match e {
            ResetSessionStoreError::SessionNotFound => ResetRouteError::SessionNotFound,
            ResetSessionStoreError::SessionAlreadyExists => ResetRouteError::InternalServerError,
        }
    }
}

impl IntoResponse for ResetRouteError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ResetRouteError::SessionNotFound => StatusCode::NOT_FOUND,
            ResetRouteError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
