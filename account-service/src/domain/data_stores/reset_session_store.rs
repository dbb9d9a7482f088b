use std::time::Duration;

use crate::domain::{ResetSession, ResetSessionId};

use super::ResetSessionStoreError;

// Live password reset sessions, keyed by the id handed to the UI.
#[async_trait::async_trait]
pub trait ResetSessionStore: Send + Sync {
    async fn add_session(
        &mut self,
        id: ResetSessionId,
        session: ResetSession,
    ) -> Result<(), ResetSessionStoreError>;
    async fn get_session(&self, id: &ResetSessionId) -> Result<&ResetSession, ResetSessionStoreError>;
    async fn get_session_mut(
        &mut self,
        id: &ResetSessionId,
    ) -> Result<&mut ResetSession, ResetSessionStoreError>;
    async fn remove_session(&mut self, id: &ResetSessionId) -> Result<ResetSession, ResetSessionStoreError>;
    /// Drops every session idle for at least `max_idle` and returns how many
    /// were dropped.
    async fn remove_idle(&mut self, max_idle: Duration) -> usize;
    async fn session_count(&self) -> usize;
}
