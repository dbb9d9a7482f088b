use std::collections::HashMap;
use std::time::Duration;

use crate::domain::data_stores::{ResetSessionStore, ResetSessionStoreError};
use crate::domain::{ResetSession, ResetSessionId};

#[derive(Default)]
pub struct HashmapResetSessionStore {
    sessions: HashMap<ResetSessionId, ResetSession>,
}

#[async_trait::async_trait]
impl ResetSessionStore for HashmapResetSessionStore {
    async fn add_session(
        &mut self,
        id: ResetSessionId,
        session: ResetSession,
    ) -> Result<(), ResetSessionStoreError> {
        if self.sessions.contains_key(&id) {
            return Err(ResetSessionStoreError::SessionAlreadyExists);
        }
        self.sessions.insert(id, session);
        Ok(())
    }

    async fn get_session(&self, id: &ResetSessionId) -> Result<&ResetSession, ResetSessionStoreError> {
        self.sessions
            .get(id)
            .ok_or(ResetSessionStoreError::SessionNotFound)
    }

    async fn get_session_mut(
        &mut self,
        id: &ResetSessionId,
    ) -> Result<&mut ResetSession, ResetSessionStoreError> {
        self.sessions
            .get_mut(id)
            .ok_or(ResetSessionStoreError::SessionNotFound)
    }

    async fn remove_session(&mut self, id: &ResetSessionId) -> Result<ResetSession, ResetSessionStoreError> {
        self.sessions
            .remove(id)
            .ok_or(ResetSessionStoreError::SessionNotFound)
    }

    async fn remove_idle(&mut self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| session.idle_for() < max_idle);
        before - self.sessions.len()
    }

    async fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
