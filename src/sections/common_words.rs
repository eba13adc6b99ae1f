//! Common words section - flags well-known words and keyboard patterns.

use super::Verdict;
use crate::config::ScorerConfig;

/// Penalty-only: fails when any configured word appears anywhere in the password.
///
/// Both sides are compared lowercased; empty words never match.
pub fn common_word_section(password: &str, config: &ScorerConfig) -> Verdict {
    let lowered = password.to_lowercase();
    let found = config
        .common_words
        .iter()
        .filter(|w| !w.is_empty())
        .any(|w| lowered.contains(&w.to_lowercase()));
    if found {
        return Verdict::Fail {
            message: "Contains common words or patterns".into(),
        };
    }
    Verdict::Clear
}
