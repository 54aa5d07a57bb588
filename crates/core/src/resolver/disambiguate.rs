// Surname-collision detection. A candidate name is consistent with more than
// one real catalog identity when several distinct full names share its last
// token; in that case the caller must ask the user instead of guessing.

use std::collections::HashSet;

use crate::model::{EntityField, Movie};
use crate::resolver::name::last_token;
use crate::resolver::outcome::Decision;

/// Decide whether `candidate` pins down exactly one identity among the
/// matched entries.
///
/// Candidate full names are collected from the entries' selected field (all
/// star slots for actors), deduplicated in first-seen order, then narrowed to
/// those whose last whitespace token equals the candidate's, case-
/// insensitively. The verdict depends only on the resulting set, so permuting
/// `matched` never changes the decision kind or the candidate membership.
pub fn disambiguate(candidate: &str, matched: &[&Movie], field: EntityField) -> Decision {
    let surname = last_token(candidate).to_lowercase();

    let mut seen = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();
    for entry in matched {
        for name in entry.field_values(field) {
            if last_token(name).to_lowercase() != surname {
                continue;
            }
            if seen.insert(name.to_string()) {
                candidates.push(name.to_string());
            }
        }
    }

    match candidates.len() {
        0 => Decision::Rejected,
        1 => Decision::Confirmed {
            name: candidates.remove(0),
        },
        _ => Decision::NeedsDisambiguation { candidates },
    }
}
