use crate::model::FieldKind;
use std::fmt;
use thiserror::Error;

/// The kind of thing a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Contact,
    Phone,
    Note,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Entity::Contact => "Contact",
            Entity::Phone => "Phone",
            Entity::Note => "Note",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Invalid {kind}: {value:?}")]
    Validation { kind: FieldKind, value: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    #[error("Contact {name} already has phone {phone}")]
    Duplicate { name: String, phone: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

impl RolodexError {
    pub fn validation(kind: FieldKind, value: impl Into<String>) -> Self {
        RolodexError::Validation {
            kind,
            value: value.into(),
        }
    }

    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        RolodexError::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// True for failures reading or writing the snapshot.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RolodexError::Io(_) | RolodexError::Serialization(_) | RolodexError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field_and_entity() {
        let err = RolodexError::validation(FieldKind::Phone, "12ab");
        assert_eq!(err.to_string(), "Invalid Phone: \"12ab\"");

        let err = RolodexError::not_found(Entity::Note, "call back");
        assert_eq!(err.to_string(), "Note not found: call back");
    }

    #[test]
    fn io_and_serde_errors_are_persistence_failures() {
        let io = RolodexError::from(std::io::Error::other("disk full"));
        assert!(io.is_persistence());

        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(RolodexError::from(bad).is_persistence());

        assert!(!RolodexError::Api("nope".into()).is_persistence());
    }
}
