use serde::{Deserialize, Serialize};

/// Body of both the signup and the login form.
#[derive(Deserialize, Serialize, Debug)]
pub struct CredentialsRequestBody {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct AccountResponse {
    pub message: String,
}
