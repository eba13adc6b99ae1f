//! Password strength evaluator - main evaluation logic.

use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::ScorerConfig;
use crate::sections::{CHECKS, Verdict};
use crate::types::{MAX_SCORE, PasswordStrength, ScoreReport};

/// Delay before an async evaluation runs, so keystrokes can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

const BLACKLISTED_REASON: &str = "Password is in the list of commonly used passwords";

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// Scores passwords against an immutable [`ScorerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Evaluates a password and returns a detailed report.
    ///
    /// A whole-password blacklist match skips every other check.
    pub fn evaluate(&self, password: &SecretString) -> ScoreReport {
        self.evaluate_str(password.expose_secret())
    }

    fn evaluate_str(&self, pwd: &str) -> ScoreReport {
        if self.config.blacklist.contains(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected by blacklist");
            return ScoreReport {
                score: 0,
                strength: PasswordStrength::Blacklisted,
                strengths: Vec::new(),
                weaknesses: vec![BLACKLISTED_REASON.to_string()],
            };
        }

        let mut score: u8 = 0;
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        // Orchestrator: execute checks in sequence
        for check in CHECKS {
            match (check.run)(pwd, &self.config) {
                Verdict::Pass { points, message } => {
                    score = score.saturating_add(points);
                    strengths.push(message.into_owned());
                }
                Verdict::Fail { message } => weaknesses.push(message.into_owned()),
                Verdict::Clear => {}
            }
        }

        let score = score.min(MAX_SCORE);

        #[cfg(feature = "tracing")]
        tracing::debug!(score, failed = weaknesses.len(), "password evaluated");

        ScoreReport {
            score,
            strength: PasswordStrength::from_score(score),
            strengths,
            weaknesses,
        }
    }
}

/// Evaluates a password with the default rule-set and built-in blacklist.
///
/// The default [`Scorer`] is built once and shared by every call.
pub fn evaluate(password: &SecretString) -> ScoreReport {
    DEFAULT_SCORER.evaluate(password)
}

/// Async version that sends the report via channel after [`DEBOUNCE`].
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    scorer: &Scorer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled");
        return;
    }

    let report = scorer.evaluate(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_evaluate_reference_password() {
        let report = evaluate(&secret("Password1!"));

        assert_eq!(report.score, 5);
        assert_eq!(report.strength, PasswordStrength::Strong);
        assert_eq!(
            report.strengths,
            vec![
                "Acceptable length (8+ characters)",
                "Contains numbers",
                "Contains lowercase letters",
                "Contains uppercase letters",
                "Contains special characters",
            ]
        );
        assert_eq!(report.weaknesses, vec!["Contains common words or patterns"]);
    }

    #[test]
    fn test_evaluate_shares_default_scorer() {
        let first: *const Scorer = &*DEFAULT_SCORER;
        let report = evaluate(&secret("Zebra#Cloud7Mint"));
        assert_eq!(report, Scorer::default().evaluate(&secret("Zebra#Cloud7Mint")));
        assert!(std::ptr::eq(first, &*DEFAULT_SCORER));
        assert_eq!(DEFAULT_SCORER.config(), &ScorerConfig::default());
    }

    #[test]
    fn test_evaluate_custom_length_messages() {
        let config = ScorerConfig {
            short_length: 10,
            long_length: 16,
            ..ScorerConfig::default()
        };
        let report = Scorer::new(config).evaluate(&secret("Abc1!xyzw"));
        assert_eq!(report.score, 4);
        assert_eq!(
            report.weaknesses,
            vec!["Password is too short (less than 10 characters)"]
        );
    }

    #[test]
    fn test_evaluate_max_score() {
        let report = evaluate(&secret("Zebra#Cloud7Mint"));
        assert_eq!(report.score, MAX_SCORE);
        assert_eq!(report.strength, PasswordStrength::Strong);
        assert!(report.weaknesses.is_empty());
    }

    #[test]
    fn test_evaluate_medium_password() {
        let report = evaluate(&secret("lowercase99"));
        assert_eq!(report.score, 3);
        assert_eq!(report.strength, PasswordStrength::Medium);
        assert_eq!(
            report.weaknesses,
            vec!["No uppercase letters", "No special characters"]
        );
    }

    #[test]
    fn test_evaluate_repeated_characters() {
        let report = evaluate(&secret("aaa111"));
        assert_eq!(report.score, 2);
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert!(report.weaknesses.iter().any(|w| w == "Contains repeated characters"));
        assert!(report.weaknesses.iter().any(|w| w.contains("too short")));
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate(&secret(""));
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert!(report.strengths.is_empty());
        assert_eq!(
            report.weaknesses,
            vec![
                "Password is too short (less than 8 characters)",
                "No numbers",
                "No lowercase letters",
                "No uppercase letters",
                "No special characters",
            ]
        );
    }

    #[test]
    fn test_evaluate_short_passwords_fail_length() {
        for pwd in ["", "a", "Ab1!", "Ab1!xyz"] {
            let report = evaluate(&secret(pwd));
            assert!(
                report.weaknesses.iter().any(|w| w.contains("too short")),
                "expected length failure for {pwd:?}"
            );
        }
    }

    #[test]
    fn test_evaluate_blacklisted_any_case() {
        let scorer = Scorer::default();
        for entry in scorer.config().blacklist.iter() {
            for candidate in [entry.to_string(), entry.to_uppercase()] {
                let report = scorer.evaluate(&secret(&candidate));
                assert_eq!(report.score, 0, "{candidate}");
                assert_eq!(report.strength, PasswordStrength::Blacklisted);
                assert!(report.strengths.is_empty());
                assert_eq!(report.weaknesses, vec![BLACKLISTED_REASON]);
            }
        }
    }

    #[test]
    fn test_evaluate_blacklist_overrides_strong_properties() {
        let config = ScorerConfig::default()
            .with_blacklist(Blacklist::from_entries(["Tr0ub4dor&3Horse"]));
        let scorer = Scorer::new(config);

        let report = scorer.evaluate(&secret("TR0UB4DOR&3HORSE"));
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, PasswordStrength::Blacklisted);

        // the built-in list no longer applies
        let report = scorer.evaluate(&secret("password"));
        assert_ne!(report.strength, PasswordStrength::Blacklisted);
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = [
            "",
            "a",
            "password",
            "Password1!",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "VeryStrongPassword123!@#",
            "ÜñíçødéPässwörd€",
        ];

        for pwd_str in test_passwords {
            let report = evaluate(&secret(pwd_str));
            assert!(
                report.score <= MAX_SCORE,
                "Score {} out of bounds for password '{}'",
                report.score,
                pwd_str
            );
            assert_eq!(
                report.strength == PasswordStrength::Blacklisted,
                Blacklist::default().contains(pwd_str)
            );
        }
    }
}
