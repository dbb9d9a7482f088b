use crate::validation::is_valid_email;

/// An address that passed the signup format check. Stored and compared as
/// typed, without case folding.
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(email: String) -> Result<Email, String> {
        if is_valid_email(&email) {
            Ok(Email(email))
        } else {
            Err(format!("{:?} is not a valid email address", email))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
