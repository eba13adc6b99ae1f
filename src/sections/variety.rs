//! Character variety sections - one check per character class.

use super::{Verdict, class_check};
use crate::charset::is_special;
use crate::config::ScorerConfig;

pub fn digit_section(password: &str, _config: &ScorerConfig) -> Verdict {
    class_check(
        password.chars().any(|c| c.is_ascii_digit()),
        "Contains numbers",
        "No numbers",
    )
}

pub fn lowercase_section(password: &str, _config: &ScorerConfig) -> Verdict {
    class_check(
        password.chars().any(|c| c.is_ascii_lowercase()),
        "Contains lowercase letters",
        "No lowercase letters",
    )
}

pub fn uppercase_section(password: &str, _config: &ScorerConfig) -> Verdict {
    class_check(
        password.chars().any(|c| c.is_ascii_uppercase()),
        "Contains uppercase letters",
        "No uppercase letters",
    )
}

/// Only characters from [`crate::charset::SPECIAL`] count.
pub fn special_section(password: &str, _config: &ScorerConfig) -> Verdict {
    class_check(
        password.chars().any(is_special),
        "Contains special characters",
        "No special characters",
    )
}
