//! Ability-score generation.
//!
//! One score is four d6: every die that shows a 1 on the first pass is
//! rerolled exactly once (the reroll stands, even if it is another 1),
//! then the lowest die is dropped and the other three are summed.
//! Scores therefore always fall in `3..=18`.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::error::{MechError, MechResult};

/// Number of d6 rolled for each ability score.
pub const ABILITY_DICE: usize = 4;

/// Every score the procedure can produce.
pub const ABILITY_SCORE_RANGE: RangeInclusive<u32> = 3..=18;

/// Number of ability scores in a full set.
const SCORES_PER_SET: usize = 6;

/// The full record of one ability-score roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRoll {
    /// The four dice as first rolled.
    pub initial: Vec<u32>,
    /// The four dice after ones were rerolled.
    pub dice: Vec<u32>,
    /// The lowest die, excluded from the score.
    pub dropped: u32,
    /// Sum of the three kept dice.
    pub score: u32,
}

impl AbilityRoll {
    /// Resolve a roll from its initial dice.
    ///
    /// `reroll` is called once for each initial die showing 1, in order.
    pub fn resolve(initial: &[u32], reroll: impl FnMut() -> u32) -> MechResult<Self> {
        let initial: [u32; ABILITY_DICE] =
            initial.try_into().map_err(|_| MechError::WrongDiceCount {
                expected: ABILITY_DICE,
                actual: initial.len(),
            })?;
        Ok(Self::from_dice(initial, reroll))
    }

    fn from_dice(initial: [u32; ABILITY_DICE], mut reroll: impl FnMut() -> u32) -> Self {
        let dice: Vec<u32> = initial
            .iter()
            .map(|&v| if v == 1 { reroll() } else { v })
            .collect();
        let dropped = dice.iter().copied().min().unwrap_or(0);
        let score = dice.iter().sum::<u32>() - dropped;

        Self {
            initial: initial.to_vec(),
            dice,
            dropped,
            score,
        }
    }

    /// How many dice were rerolled.
    pub fn rerolls(&self) -> usize {
        self.initial.iter().filter(|&&v| v == 1).count()
    }
}

impl std::fmt::Display for AbilityRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(u32::to_string).collect();
        write!(
            f,
            "[{}] drop {} = {}",
            dice.join(", "),
            self.dropped,
            self.score
        )
    }
}

/// Roll a single ability score.
pub fn roll_ability_score<R: Rng + ?Sized>(rng: &mut R) -> AbilityRoll {
    let initial: [u32; ABILITY_DICE] = std::array::from_fn(|_| Die::D6.roll(rng));
    let roll = AbilityRoll::from_dice(initial, || Die::D6.roll(rng));
    tracing::debug!(
        initial = ?roll.initial,
        rerolls = roll.rerolls(),
        "rolled ability score {roll}"
    );
    roll
}

/// Roll a full set of six ability scores.
pub fn roll_ability_scores<R: Rng + ?Sized>(rng: &mut R) -> Vec<AbilityRoll> {
    (0..SCORES_PER_SET).map(|_| roll_ability_score(rng)).collect()
}
