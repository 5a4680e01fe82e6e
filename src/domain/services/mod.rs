//! Domain services - Pure business logic operations

mod class_catalog;
mod progression_builder;

pub use class_catalog::ClassCatalog;
pub use progression_builder::ProgressionBuilder;

#[cfg(test)]
pub use class_catalog::SUBCLASS_FEATURE;
