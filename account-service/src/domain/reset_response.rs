use serde::{Deserialize, Serialize};

use crate::domain::{ResetError, ResetSession, ResetSessionId, ResetStage};
use crate::utils::SIGN_IN_PATH;

/// What the UI renders for a reset session.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct ResetSessionView {
    pub session_id: String,
    pub stage: ResetStage,
    pub email: Option<String>,
    pub error_code: Option<ResetError>,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Where the UI goes once the reset succeeded, and how long it waits first.
    /// The session is gone after that.
    pub redirect_to: Option<String>,
    pub redirect_after_ms: Option<u64>,
}

impl ResetSessionView {
    pub fn new(id: &ResetSessionId, session: &ResetSession) -> Self {
        let succeeded = session.success_message().is_some();
        ResetSessionView {
            session_id: id.to_string(),
            stage: session.stage(),
            email: session.email().map(str::to_owned),
            error_code: session.error(),
            error: session.error().map(|e| e.to_string()),
            success: session.success_message().map(str::to_owned),
            redirect_to: succeeded.then(|| SIGN_IN_PATH.to_string()),
            redirect_after_ms: succeeded
                .then(|| u64::try_from(session.redirect_delay().as_millis()).unwrap_or(u64::MAX)),
        }
    }
}
