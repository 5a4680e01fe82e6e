//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite adapter for character storage
//! - HTTP: REST API routes
//! - Rules API: client for class features and the class directory
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod rules_api;
pub mod state;
