//! Character repository for SQLite persistence

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::{Character, LevelEntry};
use crate::domain::value_objects::CharacterId;

/// One row per character; `levels` holds the JSON array of level entries
pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: String,
    name: String,
    levels: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SqliteCharacterRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                levels TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn encode_levels(levels: &[LevelEntry]) -> Result<String> {
    serde_json::to_string(levels).context("Failed to serialize character levels")
}

fn row_to_character(row: CharacterRow) -> Result<Character> {
    let id = Uuid::parse_str(&row.id)
        .with_context(|| format!("Stored character has invalid id: {}", row.id))?;
    let levels: Vec<LevelEntry> = serde_json::from_str(&row.levels)
        .with_context(|| format!("Stored character {} has unreadable levels", row.id))?;

    Ok(Character {
        id: CharacterId::from_uuid(id),
        name: row.name,
        levels,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn create(&self, character: &Character) -> Result<()> {
        sqlx::query(
            "INSERT INTO characters (id, name, levels, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(character.id.to_string())
        .bind(&character.name)
        .bind(encode_levels(&character.levels)?)
        .bind(character.created_at)
        .bind(character.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>> {
        let row: Option<CharacterRow> = sqlx::query_as(
            "SELECT id, name, levels, created_at, updated_at FROM characters WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_character).transpose()
    }

    async fn list(&self) -> Result<Vec<Character>> {
        let rows: Vec<CharacterRow> = sqlx::query_as(
            "SELECT id, name, levels, created_at, updated_at FROM characters ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_character).collect()
    }

    async fn update(&self, character: &Character) -> Result<()> {
        let result =
            sqlx::query("UPDATE characters SET name = ?, levels = ?, updated_at = ? WHERE id = ?")
                .bind(&character.name)
                .bind(encode_levels(&character.levels)?)
                .bind(character.updated_at)
                .bind(character.id.to_string())
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            anyhow::bail!("Character not found: {}", character.id);
        }
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<()> {
        sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::ProgressionBuilder;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repository() -> SqliteCharacterRepository {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteCharacterRepository::new(pool).await.unwrap()
    }

    fn character(name: &str, class: &str) -> Character {
        ProgressionBuilder::build_character(name, &vec![class; 20]).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = repository().await;
        let stored = character("Morgana", "Sorcerer");

        repo.create(&stored).await.unwrap();
        let loaded = repo.get(stored.id).await.unwrap().unwrap();

        assert_eq!(loaded.id, stored.id);
        assert_eq!(loaded.name, "Morgana");
        assert_eq!(loaded.levels, stored.levels);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = repository().await;
        assert!(repo.get(CharacterId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_levels() {
        let repo = repository().await;
        let stored = character("Kai", "Monk");
        repo.create(&stored).await.unwrap();

        let updated = ProgressionBuilder::update(&stored, "Kai", &vec!["Druid"; 20]).unwrap();
        repo.update(&updated).await.unwrap();

        let loaded = repo.get(stored.id).await.unwrap().unwrap();
        assert_eq!(loaded.levels, updated.levels);
        assert_eq!(loaded.spell_tier(), 20);
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo = repository().await;
        assert!(repo.update(&character("Nope", "Bard")).await.is_err());
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let repo = repository().await;
        let first = character("First", "Fighter");
        let second = character("Second", "Rogue");
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);

        repo.delete(first.id).await.unwrap();
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }
}
