//! Length criterion - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Passes when the password is at least [`MIN_LENGTH`] characters long.
pub fn length_criterion(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_criterion_too_short() {
        assert!(!length_criterion("Short1!"));
    }

    #[test]
    fn test_length_criterion_exactly_minimum() {
        assert!(length_criterion("12345678"));
    }

    #[test]
    fn test_length_criterion_long_enough() {
        assert!(length_criterion("LongEnough123!"));
    }

    #[test]
    fn test_length_criterion_counts_chars_not_bytes() {
        // 8 two-byte characters satisfy the minimum
        assert!(length_criterion("аааааааа"));
        assert!(!length_criterion("ааааааа"));
    }
}
