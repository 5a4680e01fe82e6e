//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::ClassDirectoryPort;
use crate::application::services::{
    CharacterEnrichmentService, CharacterService, CharacterServiceImpl, FeatureResolver,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{connect_sqlite, SqliteCharacterRepository};
use crate::infrastructure::rules_api::Dnd5eApiClient;

/// Shared application state
pub struct AppState {
    /// Class names for pickers, straight from the rules API
    pub class_directory: Arc<dyn ClassDirectoryPort>,
    // Application services
    pub character_service: Arc<dyn CharacterService>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        // Initialize SQLite repository
        let pool = connect_sqlite(&config.database_url).await?;
        let repository = Arc::new(SqliteCharacterRepository::new(pool).await?);

        // Initialize rules API client
        let rules_client = Arc::new(Dnd5eApiClient::new(
            &config.rules_api_base_url,
            config.rules_api_timeout,
        ));

        // Initialize application services
        let mut feature_resolver =
            FeatureResolver::new(rules_client.clone()).with_timeout(config.rules_api_timeout);
        if !config.feature_cache_enabled {
            feature_resolver = feature_resolver.without_cache();
        }
        let enrichment = CharacterEnrichmentService::new(Arc::new(feature_resolver));
        let character_service = Arc::new(CharacterServiceImpl::new(repository, enrichment));

        Ok(Self::from_parts(rules_client, character_service))
    }

    pub fn from_parts(
        class_directory: Arc<dyn ClassDirectoryPort>,
        character_service: Arc<dyn CharacterService>,
    ) -> Self {
        Self {
            class_directory,
            character_service,
        }
    }
}
