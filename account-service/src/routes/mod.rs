pub(crate) mod forgot_password;
pub(crate) mod login;
pub(crate) mod preferences;
pub(crate) mod signup;

// re-export items from sub-modules
pub use forgot_password::*;
pub use login::*;
pub use preferences::*;
pub use signup::*;
