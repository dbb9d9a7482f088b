use crate::app_state::AppState;
use crate::domain::{Language, LanguagePreferenceBody, LanguagePreferenceResponse};
use crate::errors::PreferenceError;
use axum::extract::State;
use axum::Json;

pub async fn get_language(State(state): State<AppState>) -> Json<LanguagePreferenceResponse> {
    Json(state.preferences.selected_language().await.into())
}

pub async fn set_language(
    State(state): State<AppState>,
    Json(request): Json<LanguagePreferenceBody>,
) -> Result<Json<LanguagePreferenceResponse>, PreferenceError> {
    let language = Language::parse(&request.language).map_err(PreferenceError::InvalidLanguage)?;

    state
        .preferences
        .set_selected_language(language)
        .await
        .map_err(|e| {
            log::error!("could not store language preference: {}", e);
            PreferenceError::InternalServerError
        })?;

    Ok(Json(language.into()))
}
