//! Error types for character generation.

use thiserror::Error;

/// Result type for character generation.
pub type CharResult<T> = Result<T, CharError>;

/// Errors that can occur while building a character.
///
/// Invalid answers to a prompt are not errors; the builder re-prompts.
#[derive(Debug, Error)]
pub enum CharError {
    /// The input source ran out before a valid answer was given.
    #[error("input closed before a valid choice was made")]
    InputClosed,

    /// A score set did not hold exactly one score per ability.
    #[error("expected 6 ability scores, got {0}")]
    WrongScoreCount(usize),

    /// A score lies outside what the ability roll can produce.
    #[error("ability score {0} is outside 3..=18")]
    ScoreOutOfRange(u32),

    /// Reading from or writing to the terminal failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
