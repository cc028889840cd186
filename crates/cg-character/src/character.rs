//! The character record and its ability scores.

use serde::{Deserialize, Serialize};

use crate::race::Race;

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Force of personality.
    Charisma,
    /// Health and stamina.
    Constitution,
    /// Agility and reflexes.
    Dexterity,
    /// Reasoning and memory.
    Intelligence,
    /// Physical power.
    Strength,
    /// Perception and insight.
    Wisdom,
}

impl Ability {
    /// Every ability, in assignment order.
    pub const ALL: [Ability; 6] = [
        Ability::Charisma,
        Ability::Constitution,
        Ability::Dexterity,
        Ability::Intelligence,
        Ability::Strength,
        Ability::Wisdom,
    ];

    /// Lowercase name, as shown in prompts.
    pub fn name(self) -> &'static str {
        match self {
            Self::Charisma => "charisma",
            Self::Constitution => "constitution",
            Self::Dexterity => "dexterity",
            Self::Intelligence => "intelligence",
            Self::Strength => "strength",
            Self::Wisdom => "wisdom",
        }
    }

    /// Three-letter abbreviation (e.g. "DEX").
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Charisma => "CHA",
            Self::Constitution => "CON",
            Self::Dexterity => "DEX",
            Self::Intelligence => "INT",
            Self::Strength => "STR",
            Self::Wisdom => "WIS",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The six ability scores. `None` means the score has not been assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    charisma: Option<u32>,
    constitution: Option<u32>,
    dexterity: Option<u32>,
    intelligence: Option<u32>,
    strength: Option<u32>,
    wisdom: Option<u32>,
}

impl AbilityScores {
    /// All six scores unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// All six scores set to `value`.
    pub fn uniform(value: u32) -> Self {
        let mut scores = Self::new();
        for ability in Ability::ALL {
            scores.set(ability, value);
        }
        scores
    }

    fn slot(&mut self, ability: Ability) -> &mut Option<u32> {
        match ability {
            Ability::Charisma => &mut self.charisma,
            Ability::Constitution => &mut self.constitution,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Strength => &mut self.strength,
            Ability::Wisdom => &mut self.wisdom,
        }
    }

    /// The score for `ability`, if assigned.
    pub fn get(&self, ability: Ability) -> Option<u32> {
        match ability {
            Ability::Charisma => self.charisma,
            Ability::Constitution => self.constitution,
            Ability::Dexterity => self.dexterity,
            Ability::Intelligence => self.intelligence,
            Ability::Strength => self.strength,
            Ability::Wisdom => self.wisdom,
        }
    }

    /// Assign a score, replacing any previous value.
    pub fn set(&mut self, ability: Ability, value: u32) {
        *self.slot(ability) = Some(value);
    }

    /// Add `bonus` to an assigned score, saturating at `u32::MAX`.
    /// Returns false if the score is unset.
    pub fn add(&mut self, ability: Ability, bonus: u32) -> bool {
        match self.slot(ability) {
            Some(score) => {
                *score = score.saturating_add(bonus);
                true
            }
            None => false,
        }
    }

    /// True once every ability has a score.
    pub fn is_complete(&self) -> bool {
        Ability::ALL.iter().all(|&a| self.get(a).is_some())
    }

    /// Abilities paired with their scores, in [`Ability::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, Option<u32>)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// The assigned scores, in [`Ability::ALL`] order.
    pub fn values(&self) -> Vec<u32> {
        self.iter().filter_map(|(_, v)| v).collect()
    }
}

/// A tabletop role-playing character.
///
/// Height, weight, classes, and languages are carried on the record but
/// nothing in the builder fills them in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Ability scores.
    pub abilities: AbilityScores,
    /// Height, 0 when unknown.
    pub height: u32,
    /// Weight, 0 when unknown.
    pub weight: u32,
    /// Character class names.
    pub classes: Vec<String>,
    /// Known languages.
    pub languages: Vec<String>,
    /// Race, once chosen.
    pub race: Option<Race>,
    /// Bookkeeping only; left out of the serialized sheet.
    #[serde(skip)]
    racial_traits_applied: bool,
}

impl Character {
    /// A character with nothing assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the race's ability bonuses have been added.
    pub fn racial_traits_applied(&self) -> bool {
        self.racial_traits_applied
    }

    pub(crate) fn set_racial_traits_applied(&mut self, applied: bool) {
        self.racial_traits_applied = applied;
    }
}
