//! Step-by-step character building.
//!
//! `CharacterBuilder` runs the three build steps against a [`Character`]:
//! ability scores, race, racial traits. Each step either decides at random
//! or asks the user, re-prompting until it gets a valid answer.

use rand::RngCore;
use rand::seq::{IndexedRandom, SliceRandom};

use cg_mechanics::{ABILITY_SCORE_RANGE, roll_ability_scores};

use crate::character::{Ability, Character};
use crate::error::{CharError, CharResult};
use crate::io::{Notify, Prompt};
use crate::race::Race;

const INVALID_CHOICE: &str = "Invalid choice!";

/// What [`CharacterBuilder::apply_racial_traits`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitOutcome {
    /// Bonuses for this race were added.
    Applied(Race),
    /// At least one ability score is unset; nothing changed.
    AbilitiesNotSet,
    /// No race chosen yet; nothing changed.
    RaceNotSet,
    /// Bonuses were already added to these scores; nothing changed.
    AlreadyApplied,
}

/// Runs the build steps with a shared random source and user interface.
pub struct CharacterBuilder<'a> {
    rng: &'a mut dyn RngCore,
    prompt: &'a mut dyn Prompt,
    notify: &'a mut dyn Notify,
}

impl<'a> CharacterBuilder<'a> {
    /// Create a builder over the given random source and collaborators.
    pub fn new(
        rng: &'a mut dyn RngCore,
        prompt: &'a mut dyn Prompt,
        notify: &'a mut dyn Notify,
    ) -> Self {
        Self {
            rng,
            prompt,
            notify,
        }
    }

    /// Roll six scores and assign one to every ability.
    ///
    /// At random, the scores are shuffled and assigned in [`Ability::ALL`]
    /// order. Otherwise the user picks a remaining score for each ability in
    /// turn. Any previously applied racial bonus is discarded with the old
    /// scores.
    pub fn assign_ability_scores(
        &mut self,
        character: &mut Character,
        randomize: bool,
    ) -> CharResult<()> {
        let scores: Vec<u32> = roll_ability_scores(&mut *self.rng)
            .into_iter()
            .map(|roll| roll.score)
            .collect();
        self.assign_scores(character, scores, randomize)
    }

    /// Assign an already-rolled set of six scores, one per ability.
    ///
    /// Every score must lie in `3..=18`; otherwise the character is left
    /// untouched.
    pub fn assign_scores(
        &mut self,
        character: &mut Character,
        mut scores: Vec<u32>,
        randomize: bool,
    ) -> CharResult<()> {
        if scores.len() != Ability::ALL.len() {
            return Err(CharError::WrongScoreCount(scores.len()));
        }
        if let Some(&bad) = scores.iter().find(|&&s| !ABILITY_SCORE_RANGE.contains(&s)) {
            return Err(CharError::ScoreOutOfRange(bad));
        }

        character.set_racial_traits_applied(false);
        if randomize {
            scores.shuffle(&mut *self.rng);
            for (ability, score) in Ability::ALL.into_iter().zip(scores) {
                character.abilities.set(ability, score);
            }
        } else {
            for ability in Ability::ALL {
                let score = self.choose_score(ability, &mut scores)?;
                character.abilities.set(ability, score);
            }
        }

        tracing::debug!(scores = ?character.abilities.values(), "assigned ability scores");
        Ok(())
    }

    fn choose_score(&mut self, ability: Ability, pool: &mut Vec<u32>) -> CharResult<u32> {
        loop {
            self.notify.show(&format!("Scores to choose from: {pool:?}"));
            let answer = self.prompt.ask(&format!("What should we assign to {ability}? "))?;

            let picked = answer
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|value| pool.iter().position(|&s| s == value));
            match picked {
                Some(index) => return Ok(pool.remove(index)),
                None => self.notify.show(INVALID_CHOICE),
            }
        }
    }

    /// Choose the character's race.
    pub fn assign_race(&mut self, character: &mut Character, randomize: bool) -> CharResult<()> {
        let race = if randomize {
            *Race::ALL.choose(&mut *self.rng).unwrap_or(&Race::Human)
        } else {
            self.choose_race()?
        };

        tracing::debug!(%race, "assigned race");
        character.race = Some(race);
        Ok(())
    }

    fn choose_race(&mut self) -> CharResult<Race> {
        let names: Vec<&str> = Race::ALL.iter().map(|r| r.name()).collect();
        loop {
            self.notify.show(&format!("Races to choose from: {}", names.join(", ")));
            let answer = self.prompt.ask("What race should we set? ")?;
            match Race::from_name(&answer) {
                Some(race) => return Ok(race),
                None => self.notify.show(INVALID_CHOICE),
            }
        }
    }

    /// Add the race's ability bonuses.
    ///
    /// Does nothing, and says why, if scores or race are missing or the
    /// bonuses are already in the scores.
    pub fn apply_racial_traits(&mut self, character: &mut Character) -> TraitOutcome {
        if !character.abilities.is_complete() {
            self.notify.show("Abilities are not set!");
            return TraitOutcome::AbilitiesNotSet;
        }
        let Some(race) = character.race else {
            self.notify.show("Race is not set!");
            return TraitOutcome::RaceNotSet;
        };
        if character.racial_traits_applied() {
            self.notify.show("Racial traits already applied!");
            return TraitOutcome::AlreadyApplied;
        }

        for &(ability, bonus) in race.ability_bonuses() {
            character.abilities.add(ability, bonus);
        }
        character.set_racial_traits_applied(true);
        tracing::debug!(%race, "applied racial traits");
        TraitOutcome::Applied(race)
    }

    /// Build a complete character: scores, then race, then racial traits.
    pub fn build(&mut self, randomize: bool) -> CharResult<Character> {
        let mut character = Character::new();
        self.assign_ability_scores(&mut character, randomize)?;
        self.assign_race(&mut character, randomize)?;
        self.apply_racial_traits(&mut character);
        Ok(character)
    }
}

/// Build a complete character in one call.
pub fn build_character(
    randomize: bool,
    rng: &mut dyn RngCore,
    prompt: &mut dyn Prompt,
    notify: &mut dyn Notify,
) -> CharResult<Character> {
    CharacterBuilder::new(rng, prompt, notify).build(randomize)
}
