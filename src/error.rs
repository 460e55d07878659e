use std::fmt;
use thiserror::Error;

/// Which kind of catalogue record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Scope,
    Discipline,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Scope => f.write_str("Scope"),
            EntityKind::Discipline => f.write_str("Discipline"),
        }
    }
}

/// Failure of a catalogue query. A miss is the only way a query can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(EntityKind),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate scope id: {0}")]
    DuplicateScope(i64),

    #[error("Duplicate discipline id: {0}")]
    DuplicateDiscipline(String),

    #[error("Invalid catalogue: {message}")]
    InvalidCatalogue { message: String },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_entity() {
        assert_eq!(
            CatalogError::NotFound(EntityKind::Scope).to_string(),
            "Scope not found"
        );
        assert_eq!(
            CatalogError::NotFound(EntityKind::Discipline).to_string(),
            "Discipline not found"
        );
    }
}
