//! Ports - Interfaces between the application core and its adapters

pub mod outbound;
