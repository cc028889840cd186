//! Tabletop character generation.
//!
//! A [`Character`] starts with every field unset. A [`CharacterBuilder`]
//! rolls and assigns its ability scores, picks its race, and applies the
//! race's ability bonuses, either at random or by asking the user through
//! the [`Prompt`] and [`Notify`] collaborators.

pub mod builder;
pub mod character;
pub mod config;
pub mod error;
pub mod io;
pub mod race;

pub use builder::{CharacterBuilder, TraitOutcome, build_character};
pub use character::{Ability, AbilityScores, Character};
pub use config::BuilderConfig;
pub use error::{CharError, CharResult};
pub use io::{LineNotify, LinePrompt, Notify, Prompt, RecordingNotify, ScriptedPrompt, Silent};
pub use race::Race;
