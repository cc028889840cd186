//! Error types for the dice mechanics.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An ability roll was resolved from the wrong number of dice.
    #[error("ability roll needs {expected} dice, got {actual}")]
    WrongDiceCount {
        /// Dice required by the procedure.
        expected: usize,
        /// Dice actually supplied.
        actual: usize,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
