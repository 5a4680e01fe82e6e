//! Application services - Use case implementations
//!
//! This module contains the application services that implement the use cases
//! for the LevelGuide Engine. Each service follows hexagonal architecture principles,
//! accepting port dependencies and returning domain entities or view models.

pub mod character_service;
pub mod enrichment_service;
pub mod feature_resolver;

// Re-export character service types
pub use character_service::{
    CharacterService, CharacterServiceError, CharacterServiceImpl,
    CreateCharacterRequest, UpdateCharacterRequest,
};

// Re-export enrichment types
pub use enrichment_service::{CharacterEnrichmentService, CharacterSheet, LevelSheet};

pub use feature_resolver::FeatureResolver;
