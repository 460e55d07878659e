use crate::data::{builtin_disciplines, builtin_scopes};
use crate::error::{CatalogError, EntityKind, Result, ServiceError};
use crate::types::{CatalogueFile, Discipline, Recommendation, Scope};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Immutable scope and discipline tables plus the queries served over them.
///
/// Built once at startup and shared read-only; nothing mutates it afterwards,
/// so it can be handed to any number of concurrent readers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    scopes: Vec<Scope>,
    disciplines: Vec<Discipline>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogue {
    /// Validate and take ownership of the two tables.
    ///
    /// Scope ids must be positive and unique, discipline ids non-empty and
    /// unique. Consideration keys that name no known scope are kept as-is.
    pub fn new(scopes: Vec<Scope>, disciplines: Vec<Discipline>) -> Result<Self> {
        let mut scope_ids = HashSet::new();
        for scope in &scopes {
            if scope.id <= 0 {
                return Err(ServiceError::InvalidCatalogue {
                    message: format!("scope id must be positive, got {}", scope.id),
                });
            }
            if !scope_ids.insert(scope.id) {
                return Err(ServiceError::DuplicateScope(scope.id));
            }
        }

        let mut discipline_ids = HashSet::new();
        for discipline in &disciplines {
            if discipline.id.is_empty() {
                return Err(ServiceError::InvalidCatalogue {
                    message: format!("discipline '{}' has an empty id", discipline.name),
                });
            }
            if !discipline_ids.insert(discipline.id.as_str()) {
                return Err(ServiceError::DuplicateDiscipline(discipline.id.clone()));
            }
            for key in discipline.considerations.keys() {
                let known = key.parse::<i64>().map_or(false, |id| scope_ids.contains(&id));
                if !known {
                    warn!(
                        discipline = %discipline.id,
                        key = %key,
                        "Consideration key does not match any scope"
                    );
                }
            }
        }

        Ok(Self {
            scopes,
            disciplines,
        })
    }

    /// The built-in scoping matrix.
    pub fn builtin() -> Self {
        Self {
            scopes: builtin_scopes(),
            disciplines: builtin_disciplines(),
        }
    }

    /// Load a dataset from a `.toml` or `.json` file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ServiceError::Config(format!(
                "Failed to read catalogue file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file: CatalogueFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            other => {
                return Err(ServiceError::Config(format!(
                    "Unsupported catalogue format {:?} for '{}' (expected .toml or .json)",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };

        let catalogue = Self::new(file.scopes, file.disciplines)?;
        info!(
            path = %path.display(),
            scopes = catalogue.scopes.len(),
            disciplines = catalogue.disciplines.len(),
            "Loaded catalogue"
        );
        Ok(catalogue)
    }

    pub fn list_scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn get_scope(&self, scope_id: i64) -> std::result::Result<&Scope, CatalogError> {
        debug!(scope_id, "Looking up scope");
        self.scopes
            .iter()
            .find(|scope| scope.id == scope_id)
            .ok_or(CatalogError::NotFound(EntityKind::Scope))
    }

    pub fn list_disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    /// Exact, case-sensitive match on the discipline slug.
    pub fn get_discipline(
        &self,
        discipline_id: &str,
    ) -> std::result::Result<&Discipline, CatalogError> {
        debug!(discipline_id, "Looking up discipline");
        self.disciplines
            .iter()
            .find(|discipline| discipline.id == discipline_id)
            .ok_or(CatalogError::NotFound(EntityKind::Discipline))
    }

    /// Resolve the scope, then the discipline, then the guidance text.
    ///
    /// The scope is always checked first, so a request where both ids are
    /// unknown reports the scope as missing. A discipline with no entry for
    /// the scope yields the fallback text rather than an error.
    pub fn get_recommendation(
        &self,
        scope_id: i64,
        discipline_id: &str,
    ) -> std::result::Result<Recommendation<'_>, CatalogError> {
        let scope = self.get_scope(scope_id)?;
        let discipline = self.get_discipline(discipline_id)?;

        Ok(Recommendation {
            scope,
            discipline,
            recommendation: discipline.consideration_for(scope_id),
        })
    }
}
