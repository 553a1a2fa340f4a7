//! Bounded guess-and-check simulation.
//!
//! A [`GuessingGame`] holds a secret number and asks a [`GuessSource`] for
//! guesses until one matches or the attempt bound is passed. The source is
//! injected so games can be replayed deterministically:
//!
//! - [`RandomGuesses`] draws uniformly from the configured range (seedable)
//! - [`ScriptedGuesses`] replays a fixed list of guesses

use std::cmp::Ordering;
use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::UtilError;

/// Direction hint given after a wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The secret is larger than the guess
    Higher,
    /// The secret is smaller than the guess
    Lower,
    /// The guess is the secret
    Correct,
}

/// One guess and the hint it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: u32,
    pub hint: Hint,
}

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// The number that had to be guessed
    pub secret: u32,
    /// Number of guesses made
    pub attempts: u32,
    /// Whether the last guess matched the secret
    pub solved: bool,
    /// Every guess in order
    pub rounds: Vec<Round>,
}

/// Supplies guesses to a [`GuessingGame`].
pub trait GuessSource {
    /// Returns the next guess within `low..=high`, or `None` when the source
    /// has nothing left to offer.
    fn next_guess(&mut self, low: u32, high: u32) -> Option<u32>;
}

/// Uniformly random guesses backed by a seedable RNG
#[derive(Debug, Clone)]
pub struct RandomGuesses {
    rng: StdRng,
}

impl RandomGuesses {
    /// Creates a source with a fixed seed (reproducible guesses)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the operating system
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl GuessSource for RandomGuesses {
    fn next_guess(&mut self, low: u32, high: u32) -> Option<u32> {
        Some(self.rng.random_range(low..=high))
    }
}

/// Replays a fixed sequence of guesses
#[derive(Debug, Clone, Default)]
pub struct ScriptedGuesses {
    guesses: VecDeque<u32>,
}

impl ScriptedGuesses {
    pub fn new(guesses: impl IntoIterator<Item = u32>) -> Self {
        Self {
            guesses: guesses.into_iter().collect(),
        }
    }

    /// Number of guesses not yet handed out
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl GuessSource for ScriptedGuesses {
    fn next_guess(&mut self, _low: u32, _high: u32) -> Option<u32> {
        self.guesses.pop_front()
    }
}

/// A single game with a fixed secret
#[derive(Debug, Clone)]
pub struct GuessingGame {
    secret: u32,
    config: GameConfig,
}

impl GuessingGame {
    /// Creates a game with a known secret
    ///
    /// # Errors
    ///
    /// Returns `UtilError::InvalidRange` if the range is empty or the secret
    /// lies outside it.
    pub fn new(secret: u32, config: GameConfig) -> Result<Self, UtilError> {
        config.validate()?;
        if !config.contains(secret) {
            return Err(UtilError::InvalidRange {
                low: config.low,
                high: config.high,
                secret: Some(secret),
            });
        }
        Ok(Self { secret, config })
    }

    /// Creates a game whose secret is drawn uniformly from the configured range
    pub fn random<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, UtilError> {
        config.validate()?;
        let secret = rng.random_range(config.low..=config.high);
        Ok(Self { secret, config })
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Compares a guess against the secret
    pub fn check(&self, guess: u32) -> Hint {
        match guess.cmp(&self.secret) {
            Ordering::Equal => Hint::Correct,
            Ordering::Less => Hint::Higher,
            Ordering::Greater => Hint::Lower,
        }
    }

    /// Runs the guess loop until a match, until the attempt count exceeds
    /// `max_attempts`, or until the source runs dry.
    pub fn play<S: GuessSource + ?Sized>(&self, source: &mut S) -> GameOutcome {
        let mut attempts = 0u32;
        let mut solved = false;
        let mut rounds = Vec::new();

        while !solved {
            let Some(guess) = source.next_guess(self.config.low, self.config.high) else {
                tracing::debug!(attempts, "guess source exhausted");
                break;
            };
            attempts += 1;

            let hint = self.check(guess);
            tracing::trace!(attempt = attempts, guess, ?hint, "guess");
            rounds.push(Round { guess, hint });
            solved = hint == Hint::Correct;

            if attempts > self.config.max_attempts {
                break;
            }
        }

        tracing::debug!(secret = self.secret, attempts, solved, "game finished");

        GameOutcome {
            secret: self.secret,
            attempts,
            solved,
            rounds,
        }
    }
}
