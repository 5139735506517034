//! Common-password dictionary
//!
//! Handles loading and querying the set of known/leaked passwords used for
//! the leak check.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Immutable, case-normalized set of known/compromised passwords.
///
/// Built once at startup and shared read-only; membership tests are
/// case-insensitive. Evaluation never mutates the set, so a single instance
/// can back arbitrarily many concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    /// Empty set; the leak check is always negative.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from in-memory words, applying the same normalization
    /// as the file loader. Useful for tests and embedded lists.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a word list from `path`, one password per line.
    ///
    /// Each line is trimmed and lowercased before insertion; empty lines
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list load FAILED: FileNotFound {}", path.display());
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list load FAILED: Empty file {}", path.display());
            return Err(DictionaryError::EmptyFile);
        }

        let entries: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Word list loaded: {} passwords from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { entries })
    }

    /// Loads a word list, degrading to an empty set when the file is
    /// missing, unreadable or empty.
    ///
    /// The leak check is an enhancement, not a required feature, so an
    /// unavailable word list is never surfaced as an error.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(set) => set,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Word list unavailable, leak check disabled: {}", _err);
                Self::empty()
            }
        }
    }

    /// Checks whether `candidate` is in the set (case-insensitive).
    ///
    /// The candidate is lowercased only for this lookup; the caller's value
    /// is never mutated.
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(&candidate.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PASSMETER_WORDLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn default_wordlist_path() -> PathBuf {
    std::env::var("PASSMETER_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}
