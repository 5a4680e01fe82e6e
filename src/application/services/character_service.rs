//! Character Service - Application service for character management
//!
//! This service provides use case implementations for creating, updating,
//! reading, deleting and enriching character progressions. Progression
//! logic lives in the domain; this layer sequences validation, storage and
//! enrichment.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::application::services::{CharacterEnrichmentService, CharacterSheet};
use crate::domain::entities::Character;
use crate::domain::errors::ValidationError;
use crate::domain::services::ProgressionBuilder;
use crate::domain::value_objects::CharacterId;

/// Request to create a new character
#[derive(Debug, Clone)]
pub struct CreateCharacterRequest {
    pub name: String,
    /// One class name per character level, level 1 first
    pub selections: Vec<String>,
}

/// Request to replace an existing character's name and progression
#[derive(Debug, Clone)]
pub struct UpdateCharacterRequest {
    pub name: String,
    pub selections: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CharacterServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Character not found: {0}")]
    NotFound(CharacterId),
    #[error("Repository error: {0:#}")]
    Repository(#[from] anyhow::Error),
}

pub type CharacterServiceResult<T> = Result<T, CharacterServiceError>;

/// Character service trait defining the application use cases
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Build a character from 20 selections and store it
    async fn create_character(
        &self,
        request: CreateCharacterRequest,
    ) -> CharacterServiceResult<Character>;

    /// Get a character by ID
    async fn get_character(&self, id: CharacterId) -> CharacterServiceResult<Option<Character>>;

    /// List all stored characters
    async fn list_characters(&self) -> CharacterServiceResult<Vec<Character>>;

    /// Rebuild a character's progression from scratch and store it
    async fn update_character(
        &self,
        id: CharacterId,
        request: UpdateCharacterRequest,
    ) -> CharacterServiceResult<Character>;

    /// Delete a character
    async fn delete_character(&self, id: CharacterId) -> CharacterServiceResult<()>;

    /// Enrich a stored character with spell slots and features
    async fn get_character_sheet(
        &self,
        id: CharacterId,
    ) -> CharacterServiceResult<Option<CharacterSheet>>;
}

/// Default implementation of CharacterService over a repository port
pub struct CharacterServiceImpl {
    repository: Arc<dyn CharacterRepositoryPort>,
    enrichment: CharacterEnrichmentService,
}

impl CharacterServiceImpl {
    /// Create a new CharacterServiceImpl with the given collaborators
    pub fn new(
        repository: Arc<dyn CharacterRepositoryPort>,
        enrichment: CharacterEnrichmentService,
    ) -> Self {
        Self {
            repository,
            enrichment,
        }
    }

    async fn require(&self, id: CharacterId) -> CharacterServiceResult<Character> {
        self.repository
            .get(id)
            .await?
            .ok_or(CharacterServiceError::NotFound(id))
    }
}

#[async_trait]
impl CharacterService for CharacterServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_character(
        &self,
        request: CreateCharacterRequest,
    ) -> CharacterServiceResult<Character> {
        let character = ProgressionBuilder::build_character(&request.name, &request.selections)?;

        self.repository
            .create(&character)
            .await
            .map_err(|e| e.context("Failed to create character in repository"))?;

        info!(
            character_id = %character.id,
            spell_tier = character.spell_tier(),
            "Created character: {}",
            character.name
        );
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn get_character(&self, id: CharacterId) -> CharacterServiceResult<Option<Character>> {
        debug!(character_id = %id, "Fetching character");
        let character = self
            .repository
            .get(id)
            .await
            .map_err(|e| e.context("Failed to get character from repository"))?;
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn list_characters(&self) -> CharacterServiceResult<Vec<Character>> {
        debug!("Listing characters");
        let characters = self
            .repository
            .list()
            .await
            .map_err(|e| e.context("Failed to list characters from repository"))?;
        Ok(characters)
    }

    #[instrument(skip(self, request), fields(character_id = %id))]
    async fn update_character(
        &self,
        id: CharacterId,
        request: UpdateCharacterRequest,
    ) -> CharacterServiceResult<Character> {
        let existing = self.require(id).await?;
        let character =
            ProgressionBuilder::update(&existing, &request.name, &request.selections)?;

        self.repository
            .update(&character)
            .await
            .map_err(|e| e.context("Failed to update character in repository"))?;

        info!(character_id = %id, "Updated character: {}", character.name);
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn delete_character(&self, id: CharacterId) -> CharacterServiceResult<()> {
        let character = self.require(id).await?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| e.context("Failed to delete character from repository"))?;

        info!(character_id = %id, "Deleted character: {}", character.name);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_character_sheet(
        &self,
        id: CharacterId,
    ) -> CharacterServiceResult<Option<CharacterSheet>> {
        let Some(character) = self.get_character(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.enrichment.enrich(&character).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{
        MockCharacterRepositoryPort, MockRulesSourcePort, RulesLookup,
    };
    use crate::application::services::FeatureResolver;
    use crate::domain::value_objects::ClassName;

    fn service(repository: MockCharacterRepositoryPort) -> CharacterServiceImpl {
        let mut source = MockRulesSourcePort::new();
        source
            .expect_lookup()
            .returning(|_, _| RulesLookup::NotFound);
        let resolver = Arc::new(FeatureResolver::new(Arc::new(source)));
        CharacterServiceImpl::new(
            Arc::new(repository),
            CharacterEnrichmentService::new(resolver),
        )
    }

    fn selections(class: &str) -> Vec<String> {
        vec![class.to_string(); 20]
    }

    #[tokio::test]
    async fn test_create_character_persists_built_progression() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository
            .expect_create()
            .withf(|c| c.name == "Elminster" && c.spell_tier() == 20)
            .times(1)
            .returning(|_| Ok(()));

        let character = service(repository)
            .create_character(CreateCharacterRequest {
                name: "Elminster".to_string(),
                selections: selections("Wizard"),
            })
            .await
            .unwrap();

        assert_eq!(character.levels.len(), 20);
    }

    #[tokio::test]
    async fn test_invalid_selections_never_reach_repository() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository.expect_create().never();

        let mut raw = selections("Wizard");
        raw[3] = "Necromancer".to_string();
        let err = service(repository)
            .create_character(CreateCharacterRequest {
                name: "Bad".to_string(),
                selections: raw,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CharacterServiceError::Validation(ValidationError::UnknownClass { level: Some(4), .. })
        ));
    }

    #[tokio::test]
    async fn test_update_missing_character_is_not_found() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository.expect_get().returning(|_| Ok(None));
        repository.expect_update().never();

        let id = CharacterId::new();
        let err = service(repository)
            .update_character(
                id,
                UpdateCharacterRequest {
                    name: "Ghost".to_string(),
                    selections: selections("Monk"),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CharacterServiceError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_update_rebuilds_from_scratch() {
        let existing =
            ProgressionBuilder::build_character("Tess", &selections("Rogue")).unwrap();
        let id = existing.id;

        let mut repository = MockCharacterRepositoryPort::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(move |c| c.id == id && c.levels.iter().all(|e| e.assigned_class == ClassName::Ranger))
            .times(1)
            .returning(|_| Ok(()));

        let updated = service(repository)
            .update_character(
                id,
                UpdateCharacterRequest {
                    name: "Tess".to_string(),
                    selections: selections("Ranger"),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.spell_tier(), 10);
    }

    #[tokio::test]
    async fn test_delete_missing_character_is_not_found() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository.expect_get().returning(|_| Ok(None));
        repository.expect_delete().never();

        let err = service(repository)
            .delete_character(CharacterId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, CharacterServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_repository_failure_is_surfaced() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository
            .expect_list()
            .returning(|| Err(anyhow::anyhow!("disk full")));

        let err = service(repository).list_characters().await.unwrap_err();

        assert!(matches!(err, CharacterServiceError::Repository(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn test_sheet_for_missing_character_is_none() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository.expect_get().returning(|_| Ok(None));

        let sheet = service(repository)
            .get_character_sheet(CharacterId::new())
            .await
            .unwrap();

        assert!(sheet.is_none());
    }

    #[tokio::test]
    async fn test_sheet_for_stored_character() {
        let stored = ProgressionBuilder::build_character("Vex", &selections("Ranger")).unwrap();
        let id = stored.id;

        let mut repository = MockCharacterRepositoryPort::new();
        repository
            .expect_get()
            .returning(move |_| Ok(Some(stored.clone())));

        let sheet = service(repository)
            .get_character_sheet(id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(sheet.name, "Vex");
        assert_eq!(sheet.levels[6].features, vec!["Subclass feature".to_string()]);
        assert_eq!(sheet.levels[19].spell_tier, 10);
    }
}
