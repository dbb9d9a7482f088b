mod helpers;
mod login;
mod preferences;
mod root;
mod signup;
