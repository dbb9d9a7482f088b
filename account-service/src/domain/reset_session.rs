use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use super::data_stores::CredentialStore;
use super::{Navigator, ResetError, ScheduledRedirect};
use crate::validation::is_valid_password;

pub const PASSWORD_RESET_SUCCESS: &str =
    "Your password has been reset. Redirecting you to sign in...";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResetStage {
    CollectEmail,
    CollectNewPassword,
    Completed,
}

#[derive(Debug)]
enum Step {
    CollectEmail,
    CollectNewPassword { email: String },
    Completed { email: String },
}

/// In-memory state of one "forgot password" interaction.
///
/// The session first confirms that an account exists for the submitted email,
/// then accepts a new password for that account. A successful reset completes
/// the session and schedules a redirect to sign-in; the redirect is owned by
/// the session and is cancelled if the session goes back a step or is dropped
/// before it fires.
///
/// Refused input never ends the session: the reason is kept in `error()` until
/// the next submission or `back()`. A completed session accepts no further
/// submissions.
pub struct ResetSession {
    step: Step,
    new_password: String,
    confirm_password: String,
    error: Option<ResetError>,
    success: Option<String>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    redirect: Option<ScheduledRedirect>,
    last_active: Instant,
}

impl ResetSession {
    pub fn new(navigator: Arc<dyn Navigator>, redirect_delay: Duration) -> Self {
        ResetSession {
            step: Step::CollectEmail,
            new_password: String::new(),
            confirm_password: String::new(),
            error: None,
            success: None,
            navigator,
            redirect_delay,
            redirect: None,
            last_active: Instant::now(),
        }
    }

    pub fn stage(&self) -> ResetStage {
        match self.step {
            Step::CollectEmail => ResetStage::CollectEmail,
            Step::CollectNewPassword { .. } => ResetStage::CollectNewPassword,
            Step::Completed { .. } => ResetStage::Completed,
        }
    }

    /// The verified email, once the first step has succeeded.
    pub fn email(&self) -> Option<&str> {
        match &self.step {
            Step::CollectEmail => None,
            Step::CollectNewPassword { email } | Step::Completed { email } => Some(email),
        }
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn error(&self) -> Option<ResetError> {
        self.error
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect
            .as_ref()
            .is_some_and(|redirect| !redirect.has_fired())
    }

    pub fn has_redirected(&self) -> bool {
        self.redirect.as_ref().is_some_and(ScheduledRedirect::has_fired)
    }

    /// Time since the session was created or last submitted to.
    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    pub async fn submit_email(
        &mut self,
        store: &dyn CredentialStore,
        email: &str,
    ) -> Result<(), ResetError> {
        if !matches!(self.step, Step::CollectEmail) {
            return Err(ResetError::WrongStage);
        }
        self.last_active = Instant::now();

        match store.find_by_email(email).await {
            Some(user) => {
                self.step = Step::CollectNewPassword { email: user.email };
                self.error = None;
                Ok(())
            }
            None => self.fail(ResetError::AccountNotFound),
        }
    }

    pub async fn submit_new_password(
        &mut self,
        store: &mut dyn CredentialStore,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ResetError> {
        let email = match &self.step {
            Step::CollectNewPassword { email } => email.clone(),
            Step::CollectEmail | Step::Completed { .. } => return Err(ResetError::WrongStage),
        };
        self.last_active = Instant::now();

        self.new_password = new_password.to_owned();
        self.confirm_password = confirm_password.to_owned();

        if !is_valid_password(new_password) {
            return self.fail(ResetError::PasswordTooShort);
        }
        if new_password != confirm_password {
            return self.fail(ResetError::PasswordMismatch);
        }

        match store.update_password(&email, new_password).await {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("account {} disappeared during password reset", email);
                return self.fail(ResetError::UpdateFailed);
            }
            Err(e) => {
                log::error!("could not store new password for {}: {}", email, e);
                return self.fail(ResetError::UpdateFailed);
            }
        }

        log::info!("password reset for {}", email);
        self.step = Step::Completed { email };
        self.error = None;
        self.success = Some(PASSWORD_RESET_SUCCESS.to_string());
        self.redirect = Some(ScheduledRedirect::schedule(
            self.redirect_delay,
            self.navigator.clone(),
        ));
        Ok(())
    }

    /// Returns to the email step. The verified email is forgotten and has to be
    /// submitted again. Once the redirect to sign-in has fired the session is
    /// over and this does nothing.
    pub fn back(&mut self) {
        if self.has_redirected() {
            return;
        }
        self.last_active = Instant::now();
        self.step = Step::CollectEmail;
        self.new_password.clear();
        self.confirm_password.clear();
        self.error = None;
        self.success = None;
        self.redirect = None;
    }

    fn fail(&mut self, error: ResetError) -> Result<(), ResetError> {
        self.error = Some(error);
        self.success = None;
        self.redirect = None;
        Err(error)
    }
}
