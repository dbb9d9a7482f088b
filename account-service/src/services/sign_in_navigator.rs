use std::sync::Weak;

use tokio::sync::RwLock;

use crate::domain::{Navigator, ResetSessionId, ResetSessionStore};
use crate::utils::SIGN_IN_PATH;

// The browser follows `redirect_to` in the session view. Once the redirect
// fires the session is over, so it is dropped from the registry.
pub struct SignInNavigator {
    session_id: ResetSessionId,
    sessions: Weak<RwLock<dyn ResetSessionStore>>,
}

impl SignInNavigator {
    pub fn new(session_id: ResetSessionId, sessions: Weak<RwLock<dyn ResetSessionStore>>) -> Self {
        SignInNavigator {
            session_id,
            sessions,
        }
    }
}

impl Navigator for SignInNavigator {
    fn navigate_to_sign_in(&self) {
        log::info!(
            "reset session {} finished, redirecting to {}",
            self.session_id,
            SIGN_IN_PATH
        );

        let Some(sessions) = self.sessions.upgrade() else {
            return;
        };
        let id = self.session_id;
        // the caller may hold the registry lock, so removal runs on its own task
        tokio::spawn(async move {
            if sessions.write().await.remove_session(&id).await.is_ok() {
                log::debug!("reset session {} removed after redirect", id);
            }
        });
    }
}
