use crate::app_state::AppState;
use crate::domain::{AccountResponse, CredentialsRequestBody, Email};
use crate::errors::LoginError;
use crate::services::AuthService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    // accounts may hold passwords shorter than the signup minimum; compare as given
    AuthService::login(state, email, &request.password).await?;

    Ok((
        StatusCode::OK,
        Json(AccountResponse {
            message: "Logged in successfully".to_string(),
        }),
    ))
}
