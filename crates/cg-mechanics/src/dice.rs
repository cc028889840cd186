//! Dice.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fair die with a fixed number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// The six-sided die used for ability scores.
    pub const D6: Die = Die { sides: 6 };

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// Roll this die once, uniformly over `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn d6_has_six_sides() {
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D6.to_string(), "d6");
    }

    #[test]
    fn d6_rolls_stay_on_the_die() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Die::D6.roll(&mut rng);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn every_face_is_reachable() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(Die::D6.roll(&mut rng));
        }
        assert_eq!(seen.len(), 6, "missing faces: {seen:?}");
    }
}
