use crate::core::constants::*;
use crate::core::RandomSource;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess {guess} is outside {min}..={max}")]
    OutOfRange { guess: i64, min: u32, max: u32 },
    #[error("invalid game bounds: min {min} must be below max {max}")]
    InvalidBounds { min: u32, max: u32 },
    #[error("max {max} is too large; the range must fit in a signed 32-bit integer")]
    RangeTooLarge { max: u32 },
    #[error("a round needs at least one attempt")]
    NoAttempts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { attempts: u32 },
    TooLow,
    TooHigh,
}

/// One round of guess-the-number.
#[derive(Debug, Clone)]
pub struct NumberGuessGame {
    secret: u32,
    attempts: u32,
    max_attempts: u32,
    min: u32,
    max: u32,
}

impl NumberGuessGame {
    pub fn new(
        min: u32,
        max: u32,
        max_attempts: u32,
        rng: &mut impl RandomSource,
    ) -> Result<Self, GuessError> {
        if min >= max {
            return Err(GuessError::InvalidBounds { min, max });
        }
        if max > i32::MAX as u32 {
            return Err(GuessError::RangeTooLarge { max });
        }
        if max_attempts == 0 {
            return Err(GuessError::NoAttempts);
        }
        let mut game = Self {
            secret: min,
            attempts: 0,
            max_attempts,
            min,
            max,
        };
        game.reset(rng);
        Ok(game)
    }

    /// 1..=100 with ten attempts.
    pub fn standard(rng: &mut impl RandomSource) -> Self {
        Self {
            secret: rng.int_in_range(GUESS_DEFAULT_MIN as i32, GUESS_DEFAULT_MAX as i32) as u32,
            attempts: 0,
            max_attempts: GUESS_DEFAULT_ATTEMPTS,
            min: GUESS_DEFAULT_MIN,
            max: GUESS_DEFAULT_MAX,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Revealed on game over.
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Validates a raw guess without spending an attempt.
    pub fn check_guess(&self, guess: i64) -> Result<u32, GuessError> {
        if guess < self.min as i64 || guess > self.max as i64 {
            return Err(GuessError::OutOfRange {
                guess,
                min: self.min,
                max: self.max,
            });
        }
        Ok(guess as u32)
    }

    /// Spends an attempt on `guess`.
    pub fn process_guess(&mut self, guess: u32) -> GuessOutcome {
        self.attempts += 1;
        match guess.cmp(&self.secret) {
            std::cmp::Ordering::Equal => GuessOutcome::Correct {
                attempts: self.attempts,
            },
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
        }
    }

    pub fn is_over(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// New secret, attempts back to zero.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.secret = rng.int_in_range(self.min as i32, self.max as i32) as u32;
        self.attempts = 0;
    }
}
