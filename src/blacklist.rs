//! Blacklist management module
//!
//! Loads and queries the set of passwords rejected outright.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a custom blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const BUILTIN: &[&str] = &[
    "password",
    "password1",
    "123456",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty",
    "qwerty123",
    "abc123",
    "111111",
    "000000",
    "admin",
    "letmein",
    "welcome",
    "iloveyou",
    "monkey",
    "dragon",
    "football",
    "sunshine",
    "princess",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Immutable set of lowercase known-weak passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::from_entries(BUILTIN.iter().copied())
    }
}

impl Blacklist {
    /// Builds a blacklist from arbitrary entries; they are trimmed and lowercased.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a blacklist file, one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::from_entries(content.lines());

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Loads the file named by `PWD_BLACKLIST_PATH`, or the built-in list when unset.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match blacklist_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Case-insensitive whole-string membership.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Returns the blacklist path configured through the environment, if any.
pub fn blacklist_path() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
}
