use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Where a finished reset flow sends the user.
pub trait Navigator: Send + Sync {
    fn navigate_to_sign_in(&self);
}

/// A one-shot navigation to sign-in, fired after a delay on the tokio runtime.
///
/// The redirect belongs to whoever holds this value: dropping it before the
/// delay elapses cancels the navigation.
#[derive(Debug)]
pub struct ScheduledRedirect {
    handle: JoinHandle<()>,
}

impl ScheduledRedirect {
    pub fn schedule(delay: Duration, navigator: Arc<dyn Navigator>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate_to_sign_in();
        });
        ScheduledRedirect { handle }
    }

    pub fn has_fired(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledRedirect {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
