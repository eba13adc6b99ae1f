//! Pattern analysis section - detects runs of repeated characters.

use super::Verdict;
use crate::config::ScorerConfig;

/// Penalty-only: fails on `repeat_run` or more identical consecutive characters.
pub fn repetition_section(password: &str, config: &ScorerConfig) -> Verdict {
    let run = config.repeat_run.max(2);
    let mut repeated_count = 0;
    let mut prev = None;

    for c in password.chars() {
        if prev == Some(c) {
            repeated_count += 1;
        } else {
            repeated_count = 1;
            prev = Some(c);
        }
        if repeated_count >= run {
            return Verdict::Fail {
                message: "Contains repeated characters".into(),
            };
        }
    }

    Verdict::Clear
}
