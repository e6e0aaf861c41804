//! Strength evaluator - the fixed 0-5 heuristic and the full analyzer report.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::CRITERIA;
use crate::entropy::{calculate_entropy, format_crack_time};
use crate::types::StrengthResult;

/// Default cracking speed for the report estimate, in guesses per second.
pub const DEFAULT_CRACK_SPEED: f64 = 1e9;

/// Full analyzer output: the heuristic result plus the per-criterion pass
/// map, entropy estimate and crack-time figures the analyze tab displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub result: StrengthResult,
    /// Criterion name paired with whether it passed, in scoring order.
    pub criteria: Vec<(&'static str, bool)>,
    /// Estimated entropy in bits, rounded to two decimals.
    pub entropy_bits: f64,
    /// Human-readable brute-force estimate, or `"N/A"` for a zero speed.
    pub crack_time: String,
    /// Cracking speed used, formatted as billions of guesses per second.
    pub crack_speed: String,
    /// The password with its characters reversed, for the stack demo.
    pub stack: String,
}

/// Evaluates password strength with the fixed heuristic.
///
/// The score is the number of passing criteria among: length >= 8, has
/// lowercase, has uppercase, has digit, has special character. Pure and
/// total: every string maps to a result, the empty string scoring 0 and
/// coming out Weak. Callers driving a progress display intercept the empty
/// string before applying the result (see
/// [`Page::on_password_input`](crate::Page::on_password_input)).
pub fn evaluate_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    let score = CRITERIA.iter().filter(|(_, check)| check(pwd)).count() as u8;
    StrengthResult::from_score(score)
}

/// Produces the full analyzer report for the given cracking speed in
/// guesses per second.
pub fn analyze_password(password: &SecretString, crack_speed: f64) -> PasswordReport {
    let pwd = password.expose_secret();

    let criteria: Vec<(&'static str, bool)> = CRITERIA
        .iter()
        .map(|&(name, check)| (name, check(pwd)))
        .collect();
    let score = criteria.iter().filter(|(_, passed)| *passed).count() as u8;

    let entropy_bits = calculate_entropy(pwd);
    let crack_time = if crack_speed > 0.0 {
        let combinations = 2f64.powf(entropy_bits);
        format_crack_time(combinations / crack_speed)
    } else {
        "N/A".to_string()
    };

    PasswordReport {
        result: StrengthResult::from_score(score),
        criteria,
        entropy_bits: (entropy_bits * 100.0).round() / 100.0,
        crack_time,
        crack_speed: format!("{} Billion / second", format_billions(crack_speed / 1e9)),
        stack: pwd.chars().rev().collect(),
    }
}

/// Formats the speed quotient keeping one decimal on whole numbers, so the
/// default speed reads `1.0`, not `1`.
fn format_billions(quotient: f64) -> String {
    if quotient.fract() == 0.0 {
        format!("{:.1}", quotient)
    } else {
        format!("{}", quotient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_short_lowercase_is_weak() {
        for pwd in ["a", "abc", "zzzzzzz"] {
            let result = evaluate_strength(&secret(pwd));
            assert_eq!(result.strength, Strength::Weak);
            assert_eq!(result.width, "20%");
        }
    }

    #[test]
    fn test_evaluate_empty_string_is_weak() {
        // Score 0; the 0%-width empty override belongs to the display path,
        // not to the evaluator.
        let result = evaluate_strength(&secret(""));
        assert_eq!(result.strength, Strength::Weak);
        assert_eq!(result.width, "20%");
        assert_eq!(result.color, "#ff5f75");
    }

    #[test]
    fn test_evaluate_three_criteria_is_moderate() {
        // lowercase + uppercase + digit, too short, no symbol
        let result = evaluate_strength(&secret("Abc1"));
        assert_eq!(result.strength, Strength::Moderate);
        assert_eq!(result.width, "60%");
        assert_eq!(result.color, "#ffc241");
    }

    #[test]
    fn test_evaluate_four_criteria_is_moderate() {
        // Everything but the length criterion
        let result = evaluate_strength(&secret("Ab1!"));
        assert_eq!(result.strength, Strength::Moderate);
        assert_eq!(result.width, "60%");
    }

    #[test]
    fn test_evaluate_all_criteria_is_strong() {
        let result = evaluate_strength(&secret("Abcdef1!"));
        assert_eq!(result.strength, Strength::Strong);
        assert_eq!(result.width, "100%");
        assert_eq!(result.color, "#25d996");
    }

    #[test]
    fn test_evaluate_accented_letters_count_toward_no_class() {
        // 9 chars, digit and symbol present, but the cased letters are all
        // non-ASCII: only length + digit + special pass, so Moderate.
        let result = evaluate_strength(&secret("ÀÀÀàààà1!"));
        assert_eq!(result.strength, Strength::Moderate);
        assert_eq!(result.width, "60%");
    }

    #[test]
    fn test_evaluate_long_but_uniform_is_weak() {
        // Only length and lowercase pass
        let result = evaluate_strength(&secret("abcdefghij"));
        assert_eq!(result.strength, Strength::Weak);
    }

    #[test]
    fn test_analyze_reports_per_criterion_results() {
        let report = analyze_password(&secret("Abc1"), DEFAULT_CRACK_SPEED);
        let passed: Vec<_> = report
            .criteria
            .iter()
            .filter(|(_, p)| *p)
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(passed, vec!["lower", "upper", "digit"]);
        assert_eq!(report.result.strength, Strength::Moderate);
    }

    #[test]
    fn test_analyze_entropy_and_stack() {
        let report = analyze_password(&secret("Abcdef1!"), DEFAULT_CRACK_SPEED);
        // 8 chars over the full 94-char pool, rounded to 2 decimals
        let expected = (8.0 * 94f64.log2() * 100.0).round() / 100.0;
        assert_eq!(report.entropy_bits, expected);
        assert_eq!(report.stack, "!1fedcbA");
        assert_eq!(report.crack_speed, "1.0 Billion / second");
    }

    #[test]
    fn test_analyze_fractional_speed_formatting() {
        let report = analyze_password(&secret("Abcdef1!"), 2.5e9);
        assert_eq!(report.crack_speed, "2.5 Billion / second");
    }

    #[test]
    fn test_analyze_zero_speed_has_no_estimate() {
        let report = analyze_password(&secret("Abcdef1!"), 0.0);
        assert_eq!(report.crack_time, "N/A");
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze_password(&secret(""), DEFAULT_CRACK_SPEED);
        assert_eq!(report.entropy_bits, 0.0);
        assert!(report.criteria.iter().all(|(_, passed)| !passed));
        assert_eq!(report.stack, "");
    }
}
