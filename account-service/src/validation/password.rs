pub const MIN_PASSWORD_LENGTH: usize = 6;

/// True if pw has at least `MIN_PASSWORD_LENGTH` characters.
pub fn is_valid_password(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_LENGTH
}
