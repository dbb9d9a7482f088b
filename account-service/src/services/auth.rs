use crate::app_state::AppState;
use crate::domain::{CredentialStoreError, Email, Password, UserRecord};
use crate::errors::{LoginError, SignupError};

/// Signup and login against the shared credential store. Signup is the only
/// writer of new records, so email uniqueness is enforced here.
pub struct AuthService {}

impl AuthService {
    pub async fn signup(state: AppState, email: Email, password: Password) -> Result<(), SignupError> {
        let email = email.into_inner();
        let user = UserRecord::new(email.clone(), password.into_inner());

        let result = state.user_store.write().await.add_user(user).await;
        result.map_err(|e| match e {
            CredentialStoreError::UserAlreadyExists(email) => SignupError::UserAlreadyExists(email),
            e => {
                log::error!("signup for {} failed: {}", email, e);
                SignupError::InternalServerError
            }
        })?;

        log::info!("new account {}", email);
        Ok(())
    }

    pub async fn login(state: AppState, email: Email, password: &str) -> Result<UserRecord, LoginError> {
        let user = state
            .user_store
            .read()
            .await
            .find_by_email(email.as_ref())
            .await
            .ok_or_else(|| LoginError::UserNotFound(email.as_ref().to_string()))?;

        if user.password != password {
            return Err(LoginError::InvalidCredentials);
        }
        Ok(user)
    }
}
