use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the persisted `users` collection.
///
/// Fields other than `email` and `password` are carried in `profile` so that a
/// rewrite of the collection never drops data written by other parts of the site.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        UserRecord {
            email: email.into(),
            password: password.into(),
            profile: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }
}
