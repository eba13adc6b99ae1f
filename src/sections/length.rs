//! Length section - awards points for password length.

use super::{LONG_LENGTH_POINTS, SHORT_LENGTH_POINTS, Verdict};
use crate::config::ScorerConfig;

/// Scores the password length, counted in characters rather than bytes.
///
/// # Returns
/// - `Pass` with [`LONG_LENGTH_POINTS`] at or above `long_length`
/// - `Pass` with [`SHORT_LENGTH_POINTS`] at or above `short_length`
/// - `Fail` otherwise
///
/// Messages quote the configured thresholds.
pub fn length_section(password: &str, config: &ScorerConfig) -> Verdict {
    let len = password.chars().count();
    if len >= config.long_length {
        Verdict::Pass {
            points: LONG_LENGTH_POINTS,
            message: format!("Good length ({}+ characters)", config.long_length).into(),
        }
    } else if len >= config.short_length {
        Verdict::Pass {
            points: SHORT_LENGTH_POINTS,
            message: format!("Acceptable length ({}+ characters)", config.short_length).into(),
        }
    } else {
        Verdict::Fail {
            message: format!(
                "Password is too short (less than {} characters)",
                config.short_length
            )
            .into(),
        }
    }
}
