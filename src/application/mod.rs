//! Application layer - Use cases over injected ports
//!
//! This layer contains:
//! - Ports: traits for the rules source, class directory and character storage
//! - Services: feature resolution, sheet enrichment and character use cases
//! - DTOs: serde shapes for the REST API

pub mod dto;
pub mod ports;
pub mod services;
