//! Password scoring checks
//!
//! Each section evaluates one rule and reports a [`Verdict`].

mod common_words;
mod length;
mod pattern;
mod variety;

pub use common_words::common_word_section;
pub use length::length_section;
pub use pattern::repetition_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use std::borrow::Cow;

use crate::config::ScorerConfig;

/// Points for a length at or above `long_length`.
pub const LONG_LENGTH_POINTS: u8 = 2;
/// Points for a length at or above `short_length`.
pub const SHORT_LENGTH_POINTS: u8 = 1;
/// Points for each character class present.
pub const CLASS_POINTS: u8 = 1;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass { points: u8, message: Cow<'static, str> },
    Fail { message: Cow<'static, str> },
    /// Penalty-only check that did not trigger.
    Clear,
}

pub type Section = fn(&str, &ScorerConfig) -> Verdict;

/// A named scoring rule.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub run: Section,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// Checks in reporting order.
pub const CHECKS: &[Check] = &[
    Check { name: "length", run: length_section },
    Check { name: "digit", run: digit_section },
    Check { name: "lowercase", run: lowercase_section },
    Check { name: "uppercase", run: uppercase_section },
    Check { name: "special", run: special_section },
    Check { name: "repetition", run: repetition_section },
    Check { name: "common_words", run: common_word_section },
];

/// Shared shape of the point-awarding class checks.
fn class_check(present: bool, pass: &'static str, fail: &'static str) -> Verdict {
    if present {
        Verdict::Pass { points: CLASS_POINTS, message: pass.into() }
    } else {
        Verdict::Fail { message: fail.into() }
    }
}
