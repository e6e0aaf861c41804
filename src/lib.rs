//! Educational password toolkit
//!
//! This library backs a small demo page: a heuristic password strength
//! evaluator, a headless page model (tabs, strength display, chart
//! surface), chart-data shaping for an external charting collaborator,
//! and a linear-vs-binary search race over a wordlist.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_LAB_WORDLIST_PATH`: Custom path to the wordlist file
//!   (default: `./assets/password.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_lab::{Strength, evaluate_strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluate_strength(&password);
//!
//! assert_eq!(result.strength, Strength::Strong);
//! assert_eq!(result.width, "100%");
//! ```

// Internal modules
mod chart;
mod criteria;
mod entropy;
mod evaluator;
mod history;
mod page;
mod search;
mod types;
mod wordlist;

// Public API
pub use chart::{
    Axis, BINARY_COLOR, ChartBackend, ChartConfig, ChartData, ChartOptions, ChartSurface,
    Dataset, LINEAR_COLOR, Scales, attempts_chart_config, render_attempts_chart,
};
pub use criteria::{CRITERIA, Criterion, MIN_LENGTH, SYMBOL_SET};
pub use entropy::{calculate_entropy, format_crack_time};
pub use evaluator::{DEFAULT_CRACK_SPEED, PasswordReport, analyze_password, evaluate_strength};
pub use history::RecentHistory;
pub use page::{
    ContentPanel, DEFAULT_TAB, NavLink, Page, PasswordInput, ProgressFill, StrengthText,
};
pub use search::{
    Attempt, SearchHistory, SearchOutcome, SearchRecord, binary_search, linear_search,
};
pub use types::{Strength, StrengthResult};
pub use wordlist::{WordlistError, append_password, load_wordlist, wordlist_path};
