//! Class catalog - static class knowledge and rules-source gap patches
//!
//! The gap tables below compensate for entries the rules API is known to
//! leave out. They are a fixed compatibility rule, not a verified ruleset.

use crate::domain::value_objects::{ClassName, SpellcastingWeight};

/// Generic entry appended where the rules API omits a subclass feature
pub const SUBCLASS_FEATURE: &str = "Subclass feature";

const PLAYABLE_CLASSES: [ClassName; 12] = [
    ClassName::Barbarian,
    ClassName::Bard,
    ClassName::Cleric,
    ClassName::Druid,
    ClassName::Fighter,
    ClassName::Monk,
    ClassName::Paladin,
    ClassName::Ranger,
    ClassName::Rogue,
    ClassName::Sorcerer,
    ClassName::Warlock,
    ClassName::Wizard,
];

/// Static lookups over the fixed class set
pub struct ClassCatalog;

impl ClassCatalog {
    /// The twelve playable classes in display order, sentinel excluded
    pub fn all_class_names() -> &'static [ClassName] {
        &PLAYABLE_CLASSES
    }

    pub fn spellcasting_weight(class: ClassName) -> SpellcastingWeight {
        match class {
            ClassName::Bard
            | ClassName::Cleric
            | ClassName::Druid
            | ClassName::Sorcerer
            | ClassName::Wizard => SpellcastingWeight::Full,
            ClassName::Paladin | ClassName::Ranger => SpellcastingWeight::Half,
            ClassName::Barbarian
            | ClassName::Fighter
            | ClassName::Monk
            | ClassName::Rogue
            | ClassName::Warlock
            | ClassName::Unassigned => SpellcastingWeight::None,
        }
    }

    pub fn is_full_caster(class: ClassName) -> bool {
        Self::spellcasting_weight(class) == SpellcastingWeight::Full
    }

    /// Class levels at which the rules API drops the subclass feature entry
    pub fn subclass_gap_levels(class: ClassName) -> &'static [u8] {
        match class {
            ClassName::Barbarian => &[6, 10, 14],
            ClassName::Bard => &[6, 14],
            ClassName::Cleric => &[6, 8, 17],
            ClassName::Druid => &[3, 6, 10, 14],
            ClassName::Fighter => &[7, 10, 15, 18],
            ClassName::Monk => &[6, 11, 17],
            ClassName::Paladin => &[7, 15, 20],
            ClassName::Ranger => &[7, 11, 15],
            ClassName::Rogue => &[9, 13, 17],
            ClassName::Sorcerer => &[6, 14, 18],
            ClassName::Warlock => &[6, 10, 14],
            ClassName::Wizard => &[6, 10, 14],
            ClassName::Unassigned => &[],
        }
    }

    /// Extra feature names to append after the rules API's own list
    pub fn feature_gap_patch(class: ClassName, level: u8) -> Vec<String> {
        let mut patch = Vec::new();

        if Self::subclass_gap_levels(class).contains(&level) {
            patch.push(SUBCLASS_FEATURE.to_string());
        }

        // Full casters gain a new spell level at every odd level from 3 to 17
        if Self::is_full_caster(class) && level % 2 == 1 && level > 1 && level < 18 {
            patch.push(format!("Level {} spells", level.div_ceil(2)));
        }

        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_class_names() {
        let names = ClassCatalog::all_class_names();
        assert_eq!(names.len(), 12);
        assert!(!names.contains(&ClassName::Unassigned));
        assert_eq!(names.first(), Some(&ClassName::Barbarian));
        assert_eq!(names.last(), Some(&ClassName::Wizard));
    }

    #[test]
    fn test_spellcasting_weights() {
        for class in [
            ClassName::Bard,
            ClassName::Cleric,
            ClassName::Druid,
            ClassName::Sorcerer,
            ClassName::Wizard,
        ] {
            assert_eq!(ClassCatalog::spellcasting_weight(class), SpellcastingWeight::Full);
        }
        for class in [ClassName::Paladin, ClassName::Ranger] {
            assert_eq!(ClassCatalog::spellcasting_weight(class), SpellcastingWeight::Half);
        }
        for class in [
            ClassName::Barbarian,
            ClassName::Fighter,
            ClassName::Monk,
            ClassName::Rogue,
            ClassName::Warlock,
            ClassName::Unassigned,
        ] {
            assert_eq!(ClassCatalog::spellcasting_weight(class), SpellcastingWeight::None);
        }
    }

    #[test]
    fn test_bard_subclass_gap() {
        assert_eq!(
            ClassCatalog::feature_gap_patch(ClassName::Bard, 6),
            vec![SUBCLASS_FEATURE.to_string()]
        );
    }

    #[test]
    fn test_wizard_spell_gap() {
        assert_eq!(
            ClassCatalog::feature_gap_patch(ClassName::Wizard, 3),
            vec!["Level 2 spells".to_string()]
        );
        assert_eq!(
            ClassCatalog::feature_gap_patch(ClassName::Wizard, 17),
            vec!["Level 9 spells".to_string()]
        );
    }

    #[test]
    fn test_fighter_gets_no_spell_entries() {
        assert_eq!(
            ClassCatalog::feature_gap_patch(ClassName::Fighter, 7),
            vec![SUBCLASS_FEATURE.to_string()]
        );
        for level in 1..=20 {
            let patch = ClassCatalog::feature_gap_patch(ClassName::Fighter, level);
            assert!(patch.iter().all(|f| !f.ends_with("spells")));
        }
    }

    #[test]
    fn test_subclass_entry_precedes_spell_entry() {
        // Druid 3 hits both gap rules
        assert_eq!(
            ClassCatalog::feature_gap_patch(ClassName::Druid, 3),
            vec![SUBCLASS_FEATURE.to_string(), "Level 2 spells".to_string()]
        );
    }

    #[test]
    fn test_spell_gap_bounds() {
        for class in [ClassName::Cleric, ClassName::Sorcerer] {
            assert!(ClassCatalog::feature_gap_patch(class, 1)
                .iter()
                .all(|f| !f.ends_with("spells")));
            assert!(ClassCatalog::feature_gap_patch(class, 19)
                .iter()
                .all(|f| !f.ends_with("spells")));
            assert!(ClassCatalog::feature_gap_patch(class, 4).is_empty());
        }
        // Half casters never get spell entries
        assert!(ClassCatalog::feature_gap_patch(ClassName::Paladin, 5).is_empty());
    }

    #[test]
    fn test_sentinel_has_no_patches() {
        for level in 1..=20 {
            assert!(ClassCatalog::feature_gap_patch(ClassName::Unassigned, level).is_empty());
        }
    }
}
