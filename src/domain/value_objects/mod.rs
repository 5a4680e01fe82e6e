//! Value objects - Immutable objects defined by their attributes

mod class_name;
mod ids;
mod spellcasting;

pub use class_name::ClassName;
pub use ids::*;
pub use spellcasting::{SpellSlots, SpellcastingWeight};
