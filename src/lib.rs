//! Rule-based password strength scoring and generation
//!
//! Scores a password against a fixed set of checks (length, character
//! classes, repeated characters, common words) with a blacklist that rejects
//! known-weak passwords outright, and generates random passwords that satisfy
//! every point-awarding check.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Blacklist file read by [`ScorerConfig::from_env`]
//!   (default: built-in list)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate, generate, DEFAULT_LENGTH};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate(&password);
//! println!("Score: {}/{}", report.score, report.max_score());
//! println!("Strength: {}", report.strength.label());
//!
//! let generated = generate(DEFAULT_LENGTH).expect("secure random source");
//! assert!(evaluate(&generated).is_acceptable());
//! ```

mod blacklist;
mod charset;
mod config;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{BLACKLIST_PATH_ENV, Blacklist, BlacklistError, blacklist_path};
pub use charset::SPECIAL;
pub use config::ScorerConfig;
pub use evaluator::{Scorer, evaluate};
pub use generator::{DEFAULT_LENGTH, Generator, GeneratorError, MAX_LENGTH, MIN_LENGTH, generate};
pub use sections::{CHECKS, Check, Verdict};
pub use types::{MAX_SCORE, MEDIUM_THRESHOLD, PasswordStrength, STRONG_THRESHOLD, ScoreReport};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_tx};
