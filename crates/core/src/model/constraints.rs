use serde::{Deserialize, Serialize};

/// Immutable per-request filter criteria. Every field is independently
/// optional; an absent field imposes no restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryConstraints {
    /// Entries must have a release year of at least this value. Entries with
    /// an unparseable year count as year 0.
    #[serde(default)]
    pub min_year: Option<i32>,
    /// Genre tags that must ALL be present on an entry (conjunction, not
    /// alternation). Empty means unconstrained.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub min_votes: Option<u64>,
    /// Compared against the normalized gross; entries whose gross does not
    /// parse are excluded whenever this is set.
    #[serde(default)]
    pub min_gross: Option<f64>,
    /// Resolved canonical director identity, matched by case-insensitive
    /// equality.
    #[serde(default)]
    pub director: Option<String>,
    /// Resolved canonical actor identity, matched against any star slot.
    #[serde(default)]
    pub actor: Option<String>,
    /// Free-text title fragment, matched by case-insensitive containment.
    #[serde(default)]
    pub title: Option<String>,
}

impl QueryConstraints {
    pub fn is_unconstrained(&self) -> bool {
        self.min_year.is_none()
            && self.genres.is_empty()
            && self.min_rating.is_none()
            && self.min_votes.is_none()
            && self.min_gross.is_none()
            && self.director.is_none()
            && self.actor.is_none()
            && self.title.is_none()
    }
}
