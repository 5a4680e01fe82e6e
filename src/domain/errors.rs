//! Domain validation errors

use thiserror::Error;

/// Malformed or out-of-catalog progression input.
///
/// Always surfaced to the caller, never silently repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Expected {expected} class selections, got {actual}")]
    SelectionCount { expected: usize, actual: usize },

    #[error("{}", describe_unknown_class(.level, .name))]
    UnknownClass { level: Option<u8>, name: String },
}

fn describe_unknown_class(level: &Option<u8>, name: &str) -> String {
    match level {
        Some(level) => format!("Invalid class at level {level}: {name:?}"),
        None => format!("Invalid class: {name:?}"),
    }
}

impl ValidationError {
    /// Attach the 1-based character level to an unknown-class error
    pub fn at_level(self, at: u8) -> Self {
        match self {
            Self::UnknownClass { name, .. } => Self::UnknownClass {
                level: Some(at),
                name,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::SelectionCount { expected: 20, actual: 19 };
        assert_eq!(err.to_string(), "Expected 20 class selections, got 19");

        let err = ValidationError::UnknownClass {
            level: None,
            name: "Necromancer".to_string(),
        }
        .at_level(7);
        assert_eq!(err.to_string(), "Invalid class at level 7: \"Necromancer\"");
    }
}
