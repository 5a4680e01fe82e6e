//! Spellcasting weights and the multiclass spell slot table

use serde::{Deserialize, Serialize};

/// How much one class level contributes to the multiclass spellcasting level.
///
/// Kept as whole halves so tier arithmetic never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellcastingWeight {
    /// Weight 1
    Full,
    /// Weight 1/2
    Half,
    /// Weight 0
    None,
}

impl SpellcastingWeight {
    /// Weight expressed in halves (Full = 2, Half = 1, None = 0)
    pub fn halves(&self) -> u32 {
        match self {
            Self::Full => 2,
            Self::Half => 1,
            Self::None => 0,
        }
    }
}

/// Highest spell level with slots
pub const MAX_SPELL_LEVEL: usize = 9;

// Rows are spell tiers 1..=20, columns spell levels 1..=9.
const SLOT_TABLE: [[u8; MAX_SPELL_LEVEL]; 20] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

/// Spell slots per spell level (index 0 is 1st-level spells)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpellSlots(pub [u8; MAX_SPELL_LEVEL]);

impl SpellSlots {
    /// Slots for a multiclass spell tier; tiers above 20 clamp to 20
    pub fn for_tier(spell_tier: u8) -> Self {
        match spell_tier {
            0 => Self::default(),
            tier => Self(SLOT_TABLE[usize::from(tier.min(20)) - 1]),
        }
    }

    pub fn highest_spell_level(&self) -> Option<usize> {
        self.0.iter().rposition(|&slots| slots > 0).map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_zero_has_no_slots() {
        let slots = SpellSlots::for_tier(0);
        assert_eq!(slots, SpellSlots::default());
        assert_eq!(slots.highest_spell_level(), None);
    }

    #[test]
    fn test_first_and_last_tier() {
        assert_eq!(SpellSlots::for_tier(1).0[0], 2);
        assert_eq!(SpellSlots::for_tier(1).highest_spell_level(), Some(1));
        assert_eq!(
            SpellSlots::for_tier(20).0,
            [4, 3, 3, 3, 3, 2, 2, 1, 1]
        );
    }

    #[test]
    fn test_highest_spell_level_tracks_odd_tiers() {
        // A new spell level opens at every odd tier up to 17
        for tier in (1u8..=17).step_by(2) {
            let expected = usize::from(tier).div_ceil(2);
            assert_eq!(SpellSlots::for_tier(tier).highest_spell_level(), Some(expected));
        }
    }

    #[test]
    fn test_tiers_above_twenty_clamp() {
        assert_eq!(SpellSlots::for_tier(25), SpellSlots::for_tier(20));
    }

    #[test]
    fn test_weight_halves() {
        assert_eq!(SpellcastingWeight::Full.halves(), 2);
        assert_eq!(SpellcastingWeight::Half.halves(), 1);
        assert_eq!(SpellcastingWeight::None.halves(), 0);
    }
}
