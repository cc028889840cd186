//! Playable races and their ability bonuses.

use serde::{Deserialize, Serialize};

use crate::character::Ability;

/// A playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    /// Charisma +1, dexterity +2.
    #[serde(rename = "High Elf")]
    HighElf,
    /// No ability bonuses.
    Human,
}

impl Race {
    /// Every playable race, in menu order.
    pub const ALL: [Race; 2] = [Race::HighElf, Race::Human];

    /// Display name, e.g. "High Elf".
    pub fn name(self) -> &'static str {
        match self {
            Self::HighElf => "High Elf",
            Self::Human => "Human",
        }
    }

    /// Look up a race by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Ability bonuses granted by this race.
    pub fn ability_bonuses(self) -> &'static [(Ability, u32)] {
        match self {
            Self::HighElf => &[(Ability::Charisma, 1), (Ability::Dexterity, 2)],
            Self::Human => &[],
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Race::from_name("High Elf"), Some(Race::HighElf));
        assert_eq!(Race::from_name("Human"), Some(Race::Human));
        assert_eq!(Race::from_name("human"), None);
        assert_eq!(Race::from_name(" Human"), None);
        assert_eq!(Race::from_name("Dwarf"), None);
    }

    #[test]
    fn high_elf_bonuses() {
        assert_eq!(
            Race::HighElf.ability_bonuses(),
            &[(Ability::Charisma, 1), (Ability::Dexterity, 2)]
        );
        assert!(Race::Human.ability_bonuses().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Race::HighElf.to_string(), "High Elf");
        assert_eq!(Race::Human.to_string(), "Human");
    }
}
