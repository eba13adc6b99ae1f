//! Report and strength types returned by the scorer.

/// Highest score the canonical rule-set can award.
pub const MAX_SCORE: u8 = 6;

/// Lowest score labelled [`PasswordStrength::Strong`].
pub const STRONG_THRESHOLD: u8 = 5;

/// Lowest score labelled [`PasswordStrength::Medium`].
pub const MEDIUM_THRESHOLD: u8 = 3;

/// Strength tier derived from a score.
///
/// `Weak`, `Medium` and `Strong` follow [`MEDIUM_THRESHOLD`] and
/// [`STRONG_THRESHOLD`]; `Blacklisted` is only assigned by the blacklist
/// short-circuit and never by [`PasswordStrength::from_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    /// The whole password matched a blacklist entry.
    Blacklisted,
}

impl PasswordStrength {
    /// Maps a score onto a strength tier.
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            PasswordStrength::Strong
        } else if score >= MEDIUM_THRESHOLD {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }

    /// Human-readable tier name.
    ///
    /// # Returns
    /// `"Weak"`, `"Medium"`, `"Strong"` or `"Blacklisted"`.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::Blacklisted => "Blacklisted",
        }
    }
}

/// Result of scoring a password.
///
/// `strengths` and `weaknesses` keep the order the checks ran in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: u8,
    pub strength: PasswordStrength,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl ScoreReport {
    /// Upper bound of [`ScoreReport::score`], for rendering `score/max`.
    ///
    /// # Returns
    /// [`MAX_SCORE`] for every report, blacklisted ones included.
    pub fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    /// `true` for Medium and Strong passwords.
    pub fn is_acceptable(&self) -> bool {
        matches!(
            self.strength,
            PasswordStrength::Medium | PasswordStrength::Strong
        )
    }
}
