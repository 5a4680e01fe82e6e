//! Domain layer - Core progression rules with no I/O
//!
//! This layer contains:
//! - Entities: Character and its per-level records
//! - Value Objects: class names, identifiers, spellcasting weights and slots
//! - Domain Services: the class catalog and the progression builder
//! - Errors: input validation failures

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
