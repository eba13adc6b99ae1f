//! Scorer configuration.

use crate::blacklist::{Blacklist, BlacklistError};

pub const LONG_LENGTH: usize = 12;
pub const SHORT_LENGTH: usize = 8;
pub const REPEAT_RUN: usize = 3;
pub const COMMON_WORDS: &[&str] = &["password", "123456", "qwerty", "admin", "letmein"];

/// Tables the scorer reads; fixed once the scorer is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerConfig {
    /// Length awarding the full length bonus.
    pub long_length: usize,
    /// Length awarding the partial length bonus.
    pub short_length: usize,
    /// Run of identical characters reported as repetition.
    pub repeat_run: usize,
    /// Substrings reported as common words, matched case-insensitively.
    pub common_words: Vec<String>,
    pub blacklist: Blacklist,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            long_length: LONG_LENGTH,
            short_length: SHORT_LENGTH,
            repeat_run: REPEAT_RUN,
            common_words: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
            blacklist: Blacklist::default(),
        }
    }
}

impl ScorerConfig {
    /// Default tables with the blacklist taken from `PWD_BLACKLIST_PATH`.
    pub fn from_env() -> Result<Self, BlacklistError> {
        Ok(Self {
            blacklist: Blacklist::from_env()?,
            ..Self::default()
        })
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_common_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }
}
