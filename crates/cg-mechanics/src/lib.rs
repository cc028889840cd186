//! Dice mechanics for chargen.
//!
//! Provides a d6 and the "4d6, reroll ones once, drop the lowest"
//! ability-score procedure. Every roll takes the random source as an
//! argument so callers can substitute a seeded generator.

pub mod ability;
pub mod dice;
pub mod error;

pub use ability::{
    ABILITY_DICE, ABILITY_SCORE_RANGE, AbilityRoll, roll_ability_score, roll_ability_scores,
};
pub use dice::Die;
pub use error::{MechError, MechResult};
