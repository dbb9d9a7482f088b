use std::sync::Arc;

use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{
    ResetSession, ResetSessionId, ResetSessionView, SubmitEmailRequestBody,
    SubmitPasswordRequestBody,
};
use crate::errors::ResetRouteError;
use crate::services::SignInNavigator;

// Refused input (unknown email, short or mismatched password) is not an HTTP
// error: it is part of the session and comes back in the view with a 200.

pub async fn start_reset(State(state): State<AppState>) -> Result<impl IntoResponse, ResetRouteError> {
    let delay = state.config.read().await.reset_redirect_delay();
    let id = ResetSessionId::default();
    let navigator = SignInNavigator::new(id, Arc::downgrade(&state.reset_sessions));
    let session = ResetSession::new(Arc::new(navigator), delay);
    let view = ResetSessionView::new(&id, &session);

    state.reset_sessions.write().await.add_session(id, session).await?;
    log::debug!("reset session {} started", id);

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_reset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResetSessionView>, ResetRouteError> {
    let id = ResetSessionId::parse(id)?;
    let sessions = state.reset_sessions.read().await;
    let session = sessions.get_session(&id).await?;
    Ok(Json(ResetSessionView::new(&id, session)))
}

pub async fn submit_email(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitEmailRequestBody>,
) -> Result<Json<ResetSessionView>, ResetRouteError> {
    let id = ResetSessionId::parse(id)?;
    let mut sessions = state.reset_sessions.write().await;
    let session = sessions.get_session_mut(&id).await?;

    let users = state.user_store.read().await;
    if let Err(e) = session.submit_email(&*users, &request.email).await {
        log::debug!("reset session {}: {:?}", id, e);
    }

    Ok(Json(ResetSessionView::new(&id, session)))
}

pub async fn submit_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitPasswordRequestBody>,
) -> Result<Json<ResetSessionView>, ResetRouteError> {
    let id = ResetSessionId::parse(id)?;
    let mut sessions = state.reset_sessions.write().await;
    let session = sessions.get_session_mut(&id).await?;

    // the write lock serialises this read-modify-write with signups and other resets
    let mut users = state.user_store.write().await;
    if let Err(e) = session
        .submit_new_password(&mut *users, &request.new_password, &request.confirm_password)
        .await
    {
        log::debug!("reset session {}: {:?}", id, e);
    }

    Ok(Json(ResetSessionView::new(&id, session)))
}

pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResetSessionView>, ResetRouteError> {
    let id = ResetSessionId::parse(id)?;
    let mut sessions = state.reset_sessions.write().await;
    let session = sessions.get_session_mut(&id).await?;

    session.back();

    Ok(Json(ResetSessionView::new(&id, session)))
}

pub async fn end_reset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ResetRouteError> {
    let id = ResetSessionId::parse(id)?;
    // dropping the session cancels a redirect that has not fired yet
    let _ = state.reset_sessions.write().await.remove_session(&id).await?;
    log::debug!("reset session {} ended", id);
    Ok(StatusCode::NO_CONTENT)
}
