use crate::constants::FALLBACK_RECOMMENDATION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a business relates to a generative AI capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub example: String,
}

/// A security practice area evaluated across every scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Guidance keyed by the scope id rendered as a string ("1", "2", ...)
    pub considerations: BTreeMap<String, String>,
}

impl Discipline {
    /// Guidance for `scope_id`, or the fixed fallback text when this
    /// discipline has nothing specific to say about that scope.
    pub fn consideration_for(&self, scope_id: i64) -> &str {
        self.considerations
            .get(&scope_id.to_string())
            .map(String::as_str)
            .unwrap_or(FALLBACK_RECOMMENDATION)
    }
}

/// A resolved (scope, discipline) pair and the guidance that applies to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation<'a> {
    pub scope: &'a Scope,
    pub discipline: &'a Discipline,
    pub recommendation: &'a str,
}

/// On-disk layout of a catalogue dataset (TOML or JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueFile {
    #[serde(default)]
    pub scopes: Vec<Scope>,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
}
