use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct SubmitEmailRequestBody {
    pub email: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SubmitPasswordRequestBody {
    pub new_password: String,
    pub confirm_password: String,
}
