//! Character variety criteria - lowercase, uppercase and digit checks.
//!
//! All three are ASCII-only, matching the `[a-z]`, `[A-Z]` and `\d`
//! classes of the heuristic; accented letters count toward no class.

/// Passes when the password contains at least one ASCII lowercase letter.
pub fn lowercase_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Passes when the password contains at least one ASCII uppercase letter.
pub fn uppercase_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Passes when the password contains at least one ASCII digit.
pub fn digit_criterion(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
