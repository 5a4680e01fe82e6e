//! SQLite persistence adapters
//!
//! Characters are stored one row per record, keyed by their opaque id.

mod character_repository;
mod connection;

pub use character_repository::SqliteCharacterRepository;
pub use connection::connect_sqlite;
