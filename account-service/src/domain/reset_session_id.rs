use std::fmt;

use uuid::Uuid;

use crate::domain::ResetSessionStoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetSessionId(Uuid);

impl ResetSessionId {
    pub fn parse(id: String) -> Result<Self, ResetSessionStoreError> {
        let parsed_id = Uuid::parse_str(&id).map_err(|_| ResetSessionStoreError::SessionNotFound)?;
        Ok(ResetSessionId(parsed_id))
    }
}

impl Default for ResetSessionId {
    fn default() -> Self {
        ResetSessionId(Uuid::new_v4())
    }
}

impl fmt::Display for ResetSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
