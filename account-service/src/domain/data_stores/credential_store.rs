use super::CredentialStoreError;
use crate::domain::UserRecord;

/// The persisted user collection.
///
/// Implementors only provide whole-collection `try_load_all` / `save_all`;
/// lookups and updates are read-modify-write over the full list. Writes refuse
/// to run over a stored value that cannot be read, so a damaged collection is
/// never replaced by a partial one. Callers sharing a store
/// across tasks must hold it behind a write lock for the mutating calls so that
/// two updates never interleave.
#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored users. Nothing stored is an empty list; a stored value
    /// that is not a user list is an error.
    async fn try_load_all(&self) -> Result<Vec<UserRecord>, CredentialStoreError>;

    /// Returns the stored users, or an empty list if nothing readable is stored.
    async fn load_all(&self) -> Vec<UserRecord> {
        self.try_load_all().await.unwrap_or_else(|e| {
            log::warn!("treating stored users as empty: {}", e);
            Vec::new()
        })
    }

    /// Overwrites the stored collection. The caller guarantees at most one
    /// record per email.
    async fn save_all(&mut self, users: &[UserRecord]) -> Result<(), CredentialStoreError>;

    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.load_all()
            .await
            .into_iter()
            .find(|user| user.email == email)
    }

    /// Replaces the password of the user with this exact email. Returns `false`
    /// and writes nothing when no such user exists.
    async fn update_password(
        &mut self,
        email: &str,
        new_password: &str,
    ) -> Result<bool, CredentialStoreError> {
        let mut users = self.try_load_all().await?;
        let Some(user) = users.iter_mut().find(|user| user.email == email) else {
            return Ok(false);
        };
        user.password = new_password.to_owned();
        self.save_all(&users).await?;
        Ok(true)
    }

    async fn add_user(&mut self, user: UserRecord) -> Result<(), CredentialStoreError> {
        let mut users = self.try_load_all().await?;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(CredentialStoreError::UserAlreadyExists(user.email));
        }
        users.push(user);
        self.save_all(&users).await
    }
}
