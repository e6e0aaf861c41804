//! Symbol criterion - membership in the fixed special-character set.

/// The fixed symbol set of the heuristic, including the trailing backtick
/// and tilde. Membership in any other character class does not count.
pub const SYMBOL_SET: &str = "!@#$%^&*()_+=-{}[]:;\"'<,>.?/`~";

/// Passes when the password contains at least one character from
/// [`SYMBOL_SET`].
pub fn symbol_criterion(password: &str) -> bool {
    password.chars().any(|c| SYMBOL_SET.contains(c))
}
