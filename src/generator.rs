//! Password generation.
//!
//! Every generated password covers each class in [`REQUIRED_CLASSES`], so it
//! always passes the length and character-class checks. The free positions are
//! unconstrained and may still produce a repeated run or a common word.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, SeedableRng};
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::{self, REQUIRED_CLASSES};

pub const DEFAULT_LENGTH: usize = 12;
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 256;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),
}

/// Password generator drawing from an injected cryptographically secure RNG.
pub struct Generator<R> {
    rng: R,
    pool: Vec<u8>,
}

impl Generator<StdRng> {
    /// Seeds a generator from the operating system's random source.
    pub fn from_os_rng() -> Result<Self, GeneratorError> {
        let rng = StdRng::try_from_os_rng().map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("OS random source unavailable: {}", e);
            GeneratorError::RandomSource(e.to_string())
        })?;
        Ok(Self::with_rng(rng))
    }
}

impl<R: CryptoRng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            pool: charset::union(),
        }
    }

    /// Generates a password of `length` characters, clamped to
    /// [`MIN_LENGTH`]..=[`MAX_LENGTH`].
    pub fn generate(&mut self, length: usize) -> SecretString {
        let length = clamp_length(length);
        let mut bytes = Vec::with_capacity(length);

        // One from each required class
        for class in REQUIRED_CLASSES {
            bytes.push(class[self.rng.random_range(0..class.len())]);
        }

        // Fill the rest from the union of all classes
        for _ in REQUIRED_CLASSES.len()..length {
            bytes.push(self.pool[self.rng.random_range(0..self.pool.len())]);
        }

        bytes.shuffle(&mut self.rng);

        let password: String = bytes.into_iter().map(char::from).collect();
        SecretString::new(password.into())
    }
}

/// Generates one password using a freshly seeded OS-backed generator.
pub fn generate(length: usize) -> Result<SecretString, GeneratorError> {
    Ok(Generator::from_os_rng()?.generate(length))
}

fn clamp_length(length: usize) -> usize {
    let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
    #[cfg(feature = "tracing")]
    if clamped != length {
        tracing::debug!(requested = length, clamped, "password length clamped");
    }
    clamped
}
