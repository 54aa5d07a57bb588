//! Immutable in-memory index over the movie dataset.
//!
//! The catalog is loaded once at process start and is read-only for the
//! lifetime of the process, so it can be shared across concurrent request
//! handlers without locking.

pub mod loader;

use std::collections::HashSet;

use crate::model::{EntityField, Movie};

pub use loader::{load_catalog, CatalogError};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Movie>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<Movie>) -> Self {
        Self { entries }
    }

    /// Entries in original dataset order.
    pub fn entries(&self) -> &[Movie] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose selected field case-insensitively contains `text` as a
    /// substring, in dataset order. Empty input never matches; missing field
    /// values never match.
    pub fn entries_matching(&self, field: EntityField, text: &str) -> Vec<&Movie> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .field_values(field)
                    .iter()
                    .any(|value| value.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Distinct non-empty values of the selected field, in first-seen dataset
    /// order. This is the reference set for fuzzy matching; values keep their
    /// original casing.
    pub fn reference_values(&self, field: EntityField) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for entry in &self.entries {
            for value in entry.field_values(field) {
                if value.is_empty() {
                    continue;
                }
                if seen.insert(value.to_string()) {
                    values.push(value.to_string());
                }
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, director: &str, stars: &[&str]) -> Movie {
        Movie {
            title: title.to_string(),
            director: director.to_string(),
            stars: stars.iter().map(|s| s.to_string()).collect(),
            genre: "Drama".to_string(),
            year: Some(2000),
            rating: Some(8.0),
            votes: 1000,
            gross: None,
            overview: None,
            poster_link: None,
            runtime: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_entries(vec![
            entry("Memento", "Christopher Nolan", &["Guy Pearce"]),
            entry("The Prestige", "Christopher Nolan", &["Hugh Jackman", "Christian Bale"]),
            entry("Person of Interest", "Jonathan Nolan", &["Jim Caviezel"]),
            entry("Heat", "Michael Mann", &["Al Pacino", "Robert De Niro"]),
        ])
    }

    #[test]
    fn substring_match_is_case_insensitive_and_ordered() {
        let catalog = catalog();
        let matched = catalog.entries_matching(EntityField::Director, "nolan");
        let titles: Vec<&str> = matched.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Memento", "The Prestige", "Person of Interest"]);
    }

    #[test]
    fn empty_input_never_matches() {
        let catalog = catalog();
        assert!(catalog.entries_matching(EntityField::Director, "  ").is_empty());
    }

    #[test]
    fn actor_matching_covers_all_star_slots() {
        let catalog = catalog();
        let matched = catalog.entries_matching(EntityField::Actor, "bale");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "The Prestige");
    }

    #[test]
    fn reference_values_are_distinct_and_first_seen_ordered() {
        let catalog = catalog();
        assert_eq!(
            catalog.reference_values(EntityField::Director),
            vec!["Christopher Nolan", "Jonathan Nolan", "Michael Mann"]
        );
        let actors = catalog.reference_values(EntityField::Actor);
        assert_eq!(actors.len(), 6);
        assert_eq!(actors[0], "Guy Pearce");
    }
}
