use serde::{Deserialize, Serialize};

use crate::application::services::{
    CharacterSheet, CreateCharacterRequest, LevelSheet, UpdateCharacterRequest,
};
use crate::domain::entities::{Character, LevelEntry};

/// Body for both create and update: a name and one class per level
#[derive(Debug, Deserialize)]
pub struct CharacterRequestDto {
    #[serde(default)]
    pub name: String,
    pub levels: Vec<String>,
}

impl From<CharacterRequestDto> for CreateCharacterRequest {
    fn from(dto: CharacterRequestDto) -> Self {
        Self {
            name: dto.name,
            selections: dto.levels,
        }
    }
}

impl From<CharacterRequestDto> for UpdateCharacterRequest {
    fn from(dto: CharacterRequestDto) -> Self {
        Self {
            name: dto.name,
            selections: dto.levels,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LevelEntryResponseDto {
    pub level: u8,
    pub class: String,
    pub class_level: u8,
    pub spell_tier: u8,
}

impl From<LevelEntry> for LevelEntryResponseDto {
    fn from(e: LevelEntry) -> Self {
        Self {
            level: e.ordinal_level,
            class: e.assigned_class.to_string(),
            class_level: e.class_level,
            spell_tier: e.spell_tier,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassLevelResponseDto {
    pub class: String,
    pub level: u8,
}

#[derive(Debug, Serialize)]
pub struct CharacterResponseDto {
    pub id: String,
    pub name: String,
    pub spell_tier: u8,
    /// Final level per class, classes without levels omitted
    pub class_levels: Vec<ClassLevelResponseDto>,
    pub levels: Vec<LevelEntryResponseDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Character> for CharacterResponseDto {
    fn from(c: Character) -> Self {
        let class_levels = c
            .class_levels()
            .breakdown()
            .into_iter()
            .map(|(class, level)| ClassLevelResponseDto {
                class: class.to_string(),
                level,
            })
            .collect();

        Self {
            id: c.id.to_string(),
            spell_tier: c.spell_tier(),
            name: c.name,
            class_levels,
            levels: c.levels.into_iter().map(LevelEntryResponseDto::from).collect(),
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LevelSheetResponseDto {
    pub level: u8,
    pub class: String,
    pub class_level: u8,
    pub spell_tier: u8,
    /// Slots for spell levels 1..=9
    pub spell_slots: Vec<u8>,
    /// Highest spell level with a slot, absent for non-casters
    pub highest_spell_level: Option<usize>,
    pub features: Vec<String>,
}

impl From<LevelSheet> for LevelSheetResponseDto {
    fn from(l: LevelSheet) -> Self {
        Self {
            level: l.ordinal_level,
            class: l.assigned_class.to_string(),
            class_level: l.class_level,
            spell_tier: l.spell_tier,
            spell_slots: l.spell_slots.0.to_vec(),
            highest_spell_level: l.spell_slots.highest_spell_level(),
            features: l.features,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CharacterSheetResponseDto {
    pub id: String,
    pub name: String,
    pub levels: Vec<LevelSheetResponseDto>,
}

impl From<CharacterSheet> for CharacterSheetResponseDto {
    fn from(s: CharacterSheet) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
            levels: s.levels.into_iter().map(LevelSheetResponseDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::ProgressionBuilder;

    #[test]
    fn test_request_name_defaults_to_empty() {
        let dto: CharacterRequestDto =
            serde_json::from_str(r#"{"levels": ["Bard", "Bard"]}"#).unwrap();
        assert_eq!(dto.name, "");
        assert_eq!(dto.levels.len(), 2);
    }

    #[test]
    fn test_character_response_shape() {
        let mut raw = vec!["Cleric"; 20];
        raw[0] = "Fighter";
        raw[1] = "N/A";
        let character = ProgressionBuilder::build_character("Brother Aldo", &raw).unwrap();

        let json = serde_json::to_value(CharacterResponseDto::from(character)).unwrap();

        assert_eq!(json["name"], "Brother Aldo");
        assert_eq!(json["spell_tier"], 18);
        assert_eq!(json["levels"].as_array().unwrap().len(), 20);
        assert_eq!(json["levels"][1]["class"], "N/A");
        assert_eq!(json["levels"][2]["class_level"], 1);
        assert_eq!(json["class_levels"][0]["class"], "Cleric");
        assert_eq!(json["class_levels"][0]["level"], 18);
        assert_eq!(json["class_levels"][1]["class"], "Fighter");
        assert_eq!(json["class_levels"][2]["class"], "N/A");
    }
}
