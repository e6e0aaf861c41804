//! Wordlist management module
//!
//! Loads the password list the search simulation runs against, and appends
//! analyzed passwords so later simulations can find them.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to access wordlist file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_LAB_WORDLIST_PATH`
/// 2. Default path `./assets/password.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_LAB_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/password.txt"))
}

/// Loads the wordlist from a file, trimming entries and skipping blank
/// lines and `#` comments. Order is preserved; the search simulation
/// depends on it.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File holds no usable entries
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist load FAILED: file not found {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let list: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();

    if list.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist load FAILED: no entries in {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist loaded: {} entries from {:?}", list.len(), path);

    Ok(list)
}

/// Appends a password to the wordlist file unless already present,
/// creating the file when absent. Empty passwords are ignored.
pub fn append_password<P: AsRef<Path>>(path: P, password: &str) -> Result<(), WordlistError> {
    if password.is_empty() {
        return Ok(());
    }

    let path = path.as_ref();
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content.lines().map(str::trim).any(|l| l == password),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };

    if !existing {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", password)?;
    }

    Ok(())
}
