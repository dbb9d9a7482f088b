mod forgot_password;
mod login;
mod preferences;
mod signup;

pub use forgot_password::*;
pub use login::*;
pub use preferences::*;
pub use signup::*;
