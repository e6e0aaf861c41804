//! Entropy estimate and crack-time formatting for the analyzer report.

use crate::criteria::{
    digit_criterion, lowercase_criterion, symbol_criterion, uppercase_criterion,
};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Estimates password entropy in bits as `length * log2(pool)`, where the
/// pool grows by 26 for lowercase, 26 for uppercase, 10 for digits and 32
/// for special characters present in the password.
///
/// Returns 0.0 for an empty password or one drawing on no known class.
pub fn calculate_entropy(password: &str) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }

    let mut pool: u32 = 0;
    if lowercase_criterion(password) {
        pool += 26;
    }
    if uppercase_criterion(password) {
        pool += 26;
    }
    if digit_criterion(password) {
        pool += 10;
    }
    if symbol_criterion(password) {
        pool += 32;
    }

    if pool == 0 {
        return 0.0;
    }

    length as f64 * (pool as f64).log2()
}

/// Formats a duration in seconds as a human-readable estimate, scaling
/// through minutes, hours, days and years.
pub fn format_crack_time(seconds: f64) -> String {
    if seconds < SECONDS_PER_MINUTE {
        return format!("{:.2} seconds", seconds);
    }
    if seconds < SECONDS_PER_HOUR {
        return format!("{:.1} minutes", seconds / SECONDS_PER_MINUTE);
    }
    if seconds < SECONDS_PER_DAY {
        return format!("{:.1} hours", seconds / SECONDS_PER_HOUR);
    }
    if seconds < SECONDS_PER_YEAR {
        return format!("{:.1} days", seconds / SECONDS_PER_DAY);
    }
    format!("{:.1} years", seconds / SECONDS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_empty_password() {
        assert_eq!(calculate_entropy(""), 0.0);
    }

    #[test]
    fn test_entropy_lowercase_only() {
        // 8 chars over a 26-char pool: 8 * log2(26)
        let expected = 8.0 * 26f64.log2();
        assert!((calculate_entropy("abcdwxyz") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_all_classes() {
        // Pool is 26 + 26 + 10 + 32 = 94
        let expected = 8.0 * 94f64.log2();
        assert!((calculate_entropy("Abcdef1!") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_pool_excludes_non_ascii_letters() {
        // Accented letters add nothing to the pool; only the digit's 10
        let expected = 5.0 * 10f64.log2();
        assert!((calculate_entropy("àÀéÉ1") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_unknown_class_only() {
        // Space belongs to no pool class
        assert_eq!(calculate_entropy("    "), 0.0);
    }

    #[test]
    fn test_format_crack_time_buckets() {
        assert_eq!(format_crack_time(0.5), "0.50 seconds");
        assert_eq!(format_crack_time(90.0), "1.5 minutes");
        assert_eq!(format_crack_time(7_200.0), "2.0 hours");
        assert_eq!(format_crack_time(172_800.0), "2.0 days");
        assert_eq!(format_crack_time(63_072_000.0), "2.0 years");
    }
}
