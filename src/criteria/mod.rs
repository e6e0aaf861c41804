//! Password heuristic criteria
//!
//! Each criterion checks one aspect of the password; the evaluator's score
//! is the number of criteria that pass.

mod length;
mod symbols;
mod variety;

pub use length::{MIN_LENGTH, length_criterion};
pub use symbols::{SYMBOL_SET, symbol_criterion};
pub use variety::{digit_criterion, lowercase_criterion, uppercase_criterion};

/// A single pass/fail check over the raw password text.
pub type Criterion = fn(&str) -> bool;

/// The five heuristic criteria, in scoring order, with their report names.
pub const CRITERIA: [(&str, Criterion); 5] = [
    ("length", length_criterion),
    ("lower", lowercase_criterion),
    ("upper", uppercase_criterion),
    ("digit", digit_criterion),
    ("special", symbol_criterion),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_table_all_pass_for_full_password() {
        for (name, check) in CRITERIA {
            assert!(check("Abcdef1!"), "criterion {} should pass", name);
        }
    }

    #[test]
    fn test_criteria_table_all_fail_for_empty_password() {
        for (name, check) in CRITERIA {
            assert!(!check(""), "criterion {} should fail", name);
        }
    }
}
