//! Search-race simulation - linear vs. binary lookup over the wordlist.
//!
//! The attempt counts produced here are what the attempts chart compares.

use std::time::{Duration, Instant};

use crate::history::RecentHistory;

/// One probe of the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub tried: String,
    pub matched: bool,
}

/// The result of running one algorithm against the wordlist.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub attempts: Vec<Attempt>,
    pub found: bool,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Summary line for the result panel, e.g.
    /// `"Password found in 3 attempts using Linear Search."`.
    pub fn summary(&self, algorithm: &str) -> String {
        if self.found {
            format!(
                "Password found in {} attempts using {}.",
                self.attempt_count(),
                algorithm
            )
        } else {
            format!(
                "Password NOT found after {} attempts using {}.",
                self.attempt_count(),
                algorithm
            )
        }
    }
}

/// Scans the wordlist in order, stopping at the first match. Every probed
/// entry counts as one attempt.
pub fn linear_search(target: &str, wordlist: &[String]) -> SearchOutcome {
    let start = Instant::now();
    let mut attempts = Vec::new();
    let mut found = false;

    for entry in wordlist {
        let matched = entry == target;
        attempts.push(Attempt {
            tried: entry.clone(),
            matched,
        });
        if matched {
            found = true;
            break;
        }
    }

    SearchOutcome {
        attempts,
        found,
        elapsed: start.elapsed(),
    }
}

/// Binary-searches a sorted copy of the wordlist. Returns the sorted list
/// alongside the outcome so the caller can display the order actually
/// probed. Every midpoint probe counts as one attempt.
pub fn binary_search(target: &str, wordlist: &[String]) -> (Vec<String>, SearchOutcome) {
    let mut sorted = wordlist.to_vec();
    sorted.sort();

    let start = Instant::now();
    let mut attempts = Vec::new();
    let mut found = false;

    if !sorted.is_empty() {
        let mut low: usize = 0;
        let mut high: usize = sorted.len() - 1;

        loop {
            let mid = (low + high) / 2;
            let tried = &sorted[mid];
            let matched = tried.as_str() == target;
            attempts.push(Attempt {
                tried: tried.clone(),
                matched,
            });
            if matched {
                found = true;
                break;
            }
            if target < tried.as_str() {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            } else {
                low = mid + 1;
            }
            if low > high {
                break;
            }
        }
    }

    let outcome = SearchOutcome {
        attempts,
        found,
        elapsed: start.elapsed(),
    };
    (sorted, outcome)
}

/// One line of the recent-runs table on the search tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub password: String,
    pub linear: String,
    pub binary: String,
}

impl SearchRecord {
    /// Condenses both outcomes the way the history table shows them,
    /// e.g. `"3 attempts (found)"`.
    pub fn new(password: &str, linear: &SearchOutcome, binary: &SearchOutcome) -> Self {
        let describe = |o: &SearchOutcome| {
            format!(
                "{} attempts ({})",
                o.attempt_count(),
                if o.found { "found" } else { "not found" }
            )
        };
        SearchRecord {
            password: password.to_string(),
            linear: describe(linear),
            binary: describe(binary),
        }
    }
}

/// Recent search runs, newest first, capped at five entries.
pub type SearchHistory = RecentHistory<SearchRecord>;
