//! Playable classes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::services::ClassCatalog;

/// One of the twelve playable classes, or the "no class" sentinel for an
/// unassigned level slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassName {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
    #[serde(rename = "N/A")]
    Unassigned,
}

impl ClassName {
    /// Number of variants, sentinel included
    pub const COUNT: usize = 13;

    /// Every variant in canonical order, sentinel last
    pub const ALL: [ClassName; Self::COUNT] = [
        Self::Barbarian,
        Self::Bard,
        Self::Cleric,
        Self::Druid,
        Self::Fighter,
        Self::Monk,
        Self::Paladin,
        Self::Ranger,
        Self::Rogue,
        Self::Sorcerer,
        Self::Warlock,
        Self::Wizard,
        Self::Unassigned,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
            Self::Unassigned => "N/A",
        }
    }

    /// Lowercase index used by the rules API, `None` for the sentinel
    pub fn api_index(&self) -> Option<&'static str> {
        match self {
            Self::Barbarian => Some("barbarian"),
            Self::Bard => Some("bard"),
            Self::Cleric => Some("cleric"),
            Self::Druid => Some("druid"),
            Self::Fighter => Some("fighter"),
            Self::Monk => Some("monk"),
            Self::Paladin => Some("paladin"),
            Self::Ranger => Some("ranger"),
            Self::Rogue => Some("rogue"),
            Self::Sorcerer => Some("sorcerer"),
            Self::Warlock => Some("warlock"),
            Self::Wizard => Some("wizard"),
            Self::Unassigned => None,
        }
    }

    /// Position in [`ClassName::ALL`], used for dense per-class storage
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ClassName {
    type Err = ValidationError;

    /// Exact match on the display name.
    ///
    /// Accepts the catalog's classes plus the `N/A` sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassCatalog::all_class_names()
            .iter()
            .copied()
            .chain([Self::Unassigned])
            .find(|class| class.display_name() == s)
            .ok_or_else(|| ValidationError::UnknownClass {
                level: None,
                name: s.to_string(),
            })
    }
}
