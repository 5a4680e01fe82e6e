//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without tying the domain model to the wire format.

pub mod character;

pub use character::*;
