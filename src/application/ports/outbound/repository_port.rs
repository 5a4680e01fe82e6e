//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

// =============================================================================
// Character Repository Port
// =============================================================================

/// Repository port for Character operations.
///
/// Each call touches a single record and is atomic on its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// Create a new character
    async fn create(&self, character: &Character) -> Result<()>;

    /// Get a character by ID
    async fn get(&self, id: CharacterId) -> Result<Option<Character>>;

    /// List all characters, oldest first
    async fn list(&self) -> Result<Vec<Character>>;

    /// Replace a stored character's name and levels
    async fn update(&self, character: &Character) -> Result<()>;

    /// Delete a character
    async fn delete(&self, id: CharacterId) -> Result<()>;
}
