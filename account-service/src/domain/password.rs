use crate::validation::{is_valid_password, MIN_PASSWORD_LENGTH};

/// A password long enough to be accepted by signup and login.
#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        if is_valid_password(&password) {
            Ok(Password(password))
        } else {
            Err(format!(
                "password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
