//! Character enrichment - Read-side projection of a stored character
//!
//! Builds the sheet shown for a character: each stored level plus its
//! spell slots and resolved features. The character itself is never touched.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, instrument};

use crate::application::services::FeatureResolver;
use crate::domain::entities::Character;
use crate::domain::value_objects::{CharacterId, ClassName, SpellSlots};

/// View model for one character level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSheet {
    pub ordinal_level: u8,
    pub assigned_class: ClassName,
    pub class_level: u8,
    pub spell_tier: u8,
    pub spell_slots: SpellSlots,
    pub features: Vec<String>,
}

/// View model for a whole character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    pub id: CharacterId,
    pub name: String,
    pub levels: Vec<LevelSheet>,
}

pub struct CharacterEnrichmentService {
    feature_resolver: Arc<FeatureResolver>,
}

impl CharacterEnrichmentService {
    pub fn new(feature_resolver: Arc<FeatureResolver>) -> Self {
        Self { feature_resolver }
    }

    /// Project a character into its sheet.
    ///
    /// Features are keyed on each level's own class level, not the
    /// character level. Lookups run concurrently and are joined in level
    /// order.
    #[instrument(skip(self, character), fields(character_id = %character.id))]
    pub async fn enrich(&self, character: &Character) -> CharacterSheet {
        let lookups = character.levels.iter().map(|entry| {
            self.feature_resolver
                .features_for(entry.assigned_class, entry.class_level)
        });
        let features = join_all(lookups).await;

        let levels = character
            .levels
            .iter()
            .zip(features)
            .map(|(entry, features)| LevelSheet {
                ordinal_level: entry.ordinal_level,
                assigned_class: entry.assigned_class,
                class_level: entry.class_level,
                spell_tier: entry.spell_tier,
                spell_slots: SpellSlots::for_tier(entry.spell_tier),
                features,
            })
            .collect::<Vec<_>>();

        debug!(levels = levels.len(), "Enriched character sheet");
        CharacterSheet {
            id: character.id,
            name: character.name.clone(),
            levels,
        }
    }
}
