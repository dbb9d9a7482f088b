use std::time::Duration;

use tokio::time::sleep;

use crate::app_state::ResetSessionStoreType;

/// Periodically drops reset sessions that nobody has touched for `max_idle`.
/// The registry is checked twice per `max_idle`, and never more than once a
/// second.
pub fn spawn_reset_session_sweeper(
    sessions: ResetSessionStoreType,
    max_idle: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let period = (max_idle / 2).max(Duration::from_secs(1));

        loop {
            sleep(period).await;

            let removed = sessions.write().await.remove_idle(max_idle).await;
            if removed > 0 {
                log::info!("dropped {} idle reset sessions", removed);
            }
        }
    })
}
