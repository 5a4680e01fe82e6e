//! Progression builder - turns 20 raw class selections into level records
//!
//! This is the single place where class levels and spellcasting tiers are
//! derived. Read paths only ever consume the entries it produces.

use chrono::Utc;

use crate::domain::entities::{
    Character, ClassLevelTally, LevelEntry, CHARACTER_LEVELS,
};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::ClassName;

/// The derived level sequence plus the tally after the last level
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    pub levels: Vec<LevelEntry>,
    pub tally: ClassLevelTally,
}

pub struct ProgressionBuilder;

impl ProgressionBuilder {
    /// Derive the level sequence from one selection per character level.
    ///
    /// Levels are accumulated in order 1..=20; each entry's spell tier
    /// reflects the tally as of that level, not the final one.
    pub fn build<S: AsRef<str>>(raw_selections: &[S]) -> Result<Progression, ValidationError> {
        if raw_selections.len() != CHARACTER_LEVELS {
            return Err(ValidationError::SelectionCount {
                expected: CHARACTER_LEVELS,
                actual: raw_selections.len(),
            });
        }

        // Parse everything up front so a bad level never yields partial output
        let classes = raw_selections
            .iter()
            .zip(1u8..)
            .map(|(raw, level)| {
                raw.as_ref()
                    .parse::<ClassName>()
                    .map_err(|e| e.at_level(level))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut tally = ClassLevelTally::new();
        let levels = classes
            .into_iter()
            .zip(1u8..)
            .map(|(assigned_class, ordinal_level)| {
                let class_level = tally.increment(assigned_class);
                LevelEntry {
                    ordinal_level,
                    assigned_class,
                    class_level,
                    spell_tier: tally.spell_tier(),
                }
            })
            .collect();
        debug_assert_eq!(tally.total(), CHARACTER_LEVELS);

        Ok(Progression { levels, tally })
    }

    /// Create a new character from a name and a full set of selections
    pub fn build_character<S: AsRef<str>>(
        name: &str,
        raw_selections: &[S],
    ) -> Result<Character, ValidationError> {
        let progression = Self::build(raw_selections)?;
        Ok(Character::new(name, progression.levels))
    }

    /// Replace a character's name and entire progression.
    ///
    /// Identity and creation time carry over; nothing is merged from the
    /// previous level sequence.
    pub fn update<S: AsRef<str>>(
        existing: &Character,
        name: &str,
        raw_selections: &[S],
    ) -> Result<Character, ValidationError> {
        let progression = Self::build(raw_selections)?;
        Ok(Character {
            id: existing.id,
            name: name.to_string(),
            levels: progression.levels,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        })
    }
}
