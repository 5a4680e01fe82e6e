//! Outbound ports - Interfaces that the application requires from external systems

mod repository_port;
mod rules_source_port;

pub use repository_port::CharacterRepositoryPort;
pub use rules_source_port::{ClassDirectoryPort, RulesLookup, RulesSourcePort};

#[cfg(test)]
pub use repository_port::MockCharacterRepositoryPort;
#[cfg(test)]
pub use rules_source_port::{MockClassDirectoryPort, MockRulesSourcePort};
