//! Character entity - a named 20-level class progression

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::ClassCatalog;
use crate::domain::value_objects::{CharacterId, ClassName};

/// Number of character levels in a full progression
pub const CHARACTER_LEVELS: usize = 20;

/// A stored character and its level-by-level progression
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    /// May be empty
    pub name: String,
    /// Exactly [`CHARACTER_LEVELS`] entries, index 0 is character level 1
    pub levels: Vec<LevelEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn new(name: impl Into<String>, levels: Vec<LevelEntry>) -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            levels,
            created_at: now,
            updated_at: now,
        }
    }

    /// Final per-class totals, re-derived from the stored entries
    pub fn class_levels(&self) -> ClassLevelTally {
        let mut tally = ClassLevelTally::new();
        for entry in &self.levels {
            tally.increment(entry.assigned_class);
        }
        tally
    }

    /// Spellcasting tier at the last recorded level
    pub fn spell_tier(&self) -> u8 {
        self.levels.last().map(|e| e.spell_tier).unwrap_or(0)
    }
}

/// One character level of a progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// Position in the career, 1..=20
    pub ordinal_level: u8,
    pub assigned_class: ClassName,
    /// The assigned class's own level, 1-based
    pub class_level: u8,
    /// Multiclass spellcasting level as of this character level
    pub spell_tier: u8,
}

/// Running per-class level counts.
///
/// Every class, the sentinel included, starts at zero and is only ever
/// incremented, so the sum of counts always equals the levels processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassLevelTally {
    counts: [u8; ClassName::COUNT],
}

impl ClassLevelTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class: ClassName) -> u8 {
        self.counts[class.index()]
    }

    /// Count one more level of `class`, returning its new class level
    pub fn increment(&mut self, class: ClassName) -> u8 {
        let count = &mut self.counts[class.index()];
        *count += 1;
        *count
    }

    /// Levels processed so far
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Floor of the weighted sum of class levels
    pub fn spell_tier(&self) -> u8 {
        let halves: u32 = ClassName::ALL
            .iter()
            .map(|&class| {
                u32::from(self.get(class)) * ClassCatalog::spellcasting_weight(class).halves()
            })
            .sum();
        // Bounded by 2 * CHARACTER_LEVELS halves, so it always fits
        (halves / 2) as u8
    }

    /// Classes with at least one level, in canonical order
    pub fn breakdown(&self) -> Vec<(ClassName, u8)> {
        ClassName::ALL
            .iter()
            .map(|&class| (class, self.get(class)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}
