// Outcome types for name resolution.
// Defines the resolver-level attempt, the disambiguation decision, and the
// combined Resolution contract consumed by the external dialogue layer.

use serde::{Deserialize, Serialize};

/// How a name was matched against the reference set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Raw outcome of the resolver's two-pass match, before disambiguation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionAttempt {
    /// Reference values containing the input as a substring, in reference
    /// order. The fuzzy step was never invoked.
    Direct(Vec<String>),
    /// Best fuzzy candidate at or above the acceptance threshold. Callers
    /// must surface the correction; it is never a silent substitution.
    Corrected { name: String, score: f64 },
    NotFound,
}

/// Disambiguation verdict for a candidate name against matched entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Confirmed { name: String },
    NeedsDisambiguation { candidates: Vec<String> },
    /// Matches exist but none share the candidate's surname structure; the
    /// caller must ask whether a full name or a surname was given.
    Rejected,
}

/// Combined resolution contract returned to the external layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Resolved { name: String, kind: MatchKind },
    Ambiguous { candidates: Vec<String> },
    NotFound,
}

/// Advisory message key the external layer renders as user-facing text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    DidYouMean,
    Ambiguous,
    NotFound,
    ClarifyName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionOutcome {
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

impl ResolutionOutcome {
    pub fn resolved(name: String, kind: MatchKind, advisory: Option<Advisory>) -> Self {
        Self {
            resolution: Resolution::Resolved { name, kind },
            advisory,
        }
    }

    pub fn ambiguous(candidates: Vec<String>) -> Self {
        Self {
            resolution: Resolution::Ambiguous { candidates },
            advisory: Some(Advisory::Ambiguous),
        }
    }

    pub fn not_found(advisory: Advisory) -> Self {
        Self {
            resolution: Resolution::NotFound,
            advisory: Some(advisory),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved { .. })
    }
}
